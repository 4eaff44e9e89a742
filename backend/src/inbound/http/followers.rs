//! Follower endpoints.
//!
//! ```text
//! PUT    /api/v1/users/{userId}/followers   {"followerId":"..."}
//! GET    /api/v1/users/{userId}/followers
//! DELETE /api/v1/users/{userId}/followers?followerId=...
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{Error, FollowerSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FOLLOWER_ID, USER_ID, parse_user_id, require_user_id};

/// Body for `PUT /users/{userId}/followers`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub follower_id: Option<String>,
}

/// Query for `DELETE /users/{userId}/followers`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UnfollowQuery {
    /// Follower to remove.
    pub follower_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowerResponse {
    pub id: Uuid,
    #[schema(example = "cicrano")]
    pub name: String,
}

impl From<FollowerSummary> for FollowerResponse {
    fn from(summary: FollowerSummary) -> Self {
        Self {
            id: *summary.follower_id.as_uuid(),
            name: summary.display_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowersResponse {
    pub followers_count: usize,
    pub content: Vec<FollowerResponse>,
}

/// Make `followerId` follow `userId`.
#[utoipa::path(
    put,
    path = "/api/v1/users/{userId}/followers",
    params(("userId" = Uuid, Path, description = "User being followed")),
    request_body = FollowRequest,
    responses(
        (status = 204, description = "Following"),
        (status = 400, description = "Missing or malformed followerId", body = Error),
        (status = 404, description = "Unknown user or follower", body = Error),
        (status = 409, description = "You can't follow yourself", body = Error)
    ),
    tags = ["followers"],
    operation_id = "followUser"
)]
#[put("/users/{userId}/followers")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<FollowRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path, USER_ID)?;
    let follower_id = require_user_id(payload.follower_id.as_deref(), FOLLOWER_ID)?;
    state.followers.follow(&user_id, &follower_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the followers of `userId`.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/followers",
    params(("userId" = Uuid, Path, description = "User whose followers to list")),
    responses(
        (status = 200, description = "Followers", body = FollowersResponse),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["followers"],
    operation_id = "listFollowers"
)]
#[get("/users/{userId}/followers")]
pub async fn list_followers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FollowersResponse>> {
    let user_id = parse_user_id(&path, USER_ID)?;
    let content: Vec<FollowerResponse> = state
        .followers
        .followers_of(&user_id)
        .await?
        .into_iter()
        .map(FollowerResponse::from)
        .collect();
    Ok(web::Json(FollowersResponse {
        followers_count: content.len(),
        content,
    }))
}

/// Stop `followerId` following `userId`. Succeeds when no edge exists.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{userId}/followers",
    params(("userId" = Uuid, Path, description = "User being unfollowed"), UnfollowQuery),
    responses(
        (status = 204, description = "Not following"),
        (status = 400, description = "Missing or malformed followerId", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["followers"],
    operation_id = "unfollowUser"
)]
#[delete("/users/{userId}/followers")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<UnfollowQuery>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path, USER_ID)?;
    let follower_id = require_user_id(query.follower_id.as_deref(), FOLLOWER_ID)?;
    state.followers.unfollow(&user_id, &follower_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
