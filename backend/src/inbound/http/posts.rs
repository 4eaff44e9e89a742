//! Post endpoints.
//!
//! ```text
//! POST /api/v1/users/{userId}/posts   {"text":"Hello"}
//! GET  /api/v1/users/{userId}/posts   followerId: <uuid>
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, Post};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USER_ID, follower_id_header, parse_user_id};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[schema(example = "Hello")]
    pub text: Option<String>,
}

/// A freshly created post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub text: String,
    pub date_time: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: *post.id().as_uuid(),
            date_time: post.created_at(),
            text: post.text().as_ref().to_owned(),
        }
    }
}

/// A post as seen by a follower.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub text: String,
    pub date_time: DateTime<Utc>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            date_time: post.created_at(),
            text: post.text().as_ref().to_owned(),
        }
    }
}

/// Publish a post as `userId`.
#[utoipa::path(
    post,
    path = "/api/v1/users/{userId}/posts",
    params(("userId" = Uuid, Path, description = "Author")),
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 404, description = "Unknown user", body = Error),
        (status = 422, description = "Validation Error", body = Error)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/users/{userId}/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PostRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path, USER_ID)?;
    let post = state.posts.create(&user_id, payload.into_inner().text).await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// List the posts of `userId`, newest first, on behalf of a follower.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/posts",
    params(
        ("userId" = Uuid, Path, description = "Author"),
        ("followerId" = Option<Uuid>, Header, description = "Requesting follower")
    ),
    responses(
        (status = 200, description = "Posts, newest first", body = [PostView]),
        (status = 400, description = "You forgot the header followerId / Inexistent followerId", body = Error),
        (status = 403, description = "You can't see these posts", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/users/{userId}/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<PostView>>> {
    let user_id = parse_user_id(&path, USER_ID)?;
    let follower_id = follower_id_header(&req)?;
    let posts = state
        .visible_posts
        .list_visible_posts(&user_id, follower_id)
        .await?;
    Ok(web::Json(posts.into_iter().map(PostView::from).collect()))
}
