//! User lifecycle service.
//!
//! Implements [`UserDirectory`] on top of a [`UserRepository`]. Profiles are
//! validated before any repository call, and deletion delegates the cascade
//! to the repository so it runs as one atomic unit.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{UserDirectory, UserProfileRequest, UserRepository};
use crate::domain::{SocialError, User, UserId, UserProfile, validate_user_profile};

fn validate(request: &UserProfileRequest) -> Result<UserProfile, SocialError> {
    validate_user_profile(request.name.as_deref(), request.age).map_err(SocialError::InvalidInput)
}

/// User directory backed by a user repository.
#[derive(Clone)]
pub struct UserDirectoryService<U> {
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U> UserDirectoryService<U> {
    /// Create a directory that stamps new users with `clock`.
    pub fn new(users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}

#[async_trait]
impl<U> UserDirectory for UserDirectoryService<U>
where
    U: UserRepository,
{
    async fn create(&self, request: UserProfileRequest) -> Result<User, SocialError> {
        let profile = validate(&request)?;
        let user = User::new(UserId::random(), profile, self.clock.utc());
        self.users.insert(&user).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<User, SocialError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UserNotFound(*id))
    }

    async fn exists(&self, id: &UserId) -> Result<bool, SocialError> {
        Ok(self.users.find_by_id(id).await?.is_some())
    }

    async fn update(&self, id: &UserId, request: UserProfileRequest) -> Result<(), SocialError> {
        let profile = validate(&request)?;
        let updated = self.get(id).await?.with_profile(profile);
        if !self.users.update(&updated).await? {
            // Deleted between the read and the write.
            return Err(SocialError::UserNotFound(*id));
        }
        info!(user_id = %id, "user updated");
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), SocialError> {
        if !self.users.delete_cascade(id).await? {
            debug!(user_id = %id, "delete of unknown user");
            return Err(SocialError::UserNotFound(*id));
        }
        info!(user_id = %id, "user deleted with edges and posts");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, SocialError> {
        Ok(self.users.list_all().await?)
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
