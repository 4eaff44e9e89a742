//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;

use crate::domain::ports::UserProfileRequest;
use crate::domain::User;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::server::{build_app, in_memory_http_state};
use crate::test_support::MutableClock;

/// Real services over an empty in-memory store, with a frozen clock.
pub fn memory_state() -> (web::Data<HttpState>, Arc<MutableClock>) {
    let clock = Arc::new(MutableClock::default());
    let state = in_memory_http_state(clock.clone());
    (web::Data::new(state), clock)
}

/// The production app wired to `state`.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(web::Data::new(HealthState::new()), state)
}

/// Create a user directly through the directory port.
pub async fn seed_user(state: &HttpState, name: &str, age: i64) -> User {
    state
        .users
        .create(UserProfileRequest {
            name: Some(name.to_owned()),
            age: Some(age),
        })
        .await
        .expect("seed user")
}
