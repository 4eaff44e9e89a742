//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP path and the DTO schemas they reference.
//! Swagger UI serves it in debug builds and `cargo run --bin openapi-dump`
//! exports it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::followers::{FollowRequest, FollowerResponse, FollowersResponse};
use crate::inbound::http::posts::{PostRequest, PostResponse, PostView};
use crate::inbound::http::users::{UserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social graph API",
        description = "Users, follower relationships, and follower-only post visibility."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::followers::follow_user,
        crate::inbound::http::followers::list_followers,
        crate::inbound::http::followers::unfollow_user,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        FollowRequest,
        FollowerResponse,
        FollowersResponse,
        PostRequest,
        PostResponse,
        PostView,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "User lifecycle"),
        (name = "followers", description = "Follow relationships"),
        (name = "posts", description = "Posts visible to followers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
