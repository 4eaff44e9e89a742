//! End-to-end scenarios driven through the HTTP surface over the in-memory
//! store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::web;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use social_backend::inbound::http::health::HealthState;
use social_backend::server::{build_app, in_memory_http_state};

async fn call<S>(app: &S, request: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

async fn create_user<S>(app: &S, name: &str, age: u32) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = call(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": name, "age": age }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("user id").to_owned()
}

async fn follow<S>(app: &S, user: &str, follower: &str) -> StatusCode
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, _) = call(
        app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{user}/followers"))
            .set_json(json!({ "followerId": follower }))
            .to_request(),
    )
    .await;
    status
}

async fn unfollow<S>(app: &S, user: &str, follower: &str) -> StatusCode
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, _) = call(
        app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{user}/followers?followerId={follower}"))
            .to_request(),
    )
    .await;
    status
}

async fn followers<S>(app: &S, user: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    call(
        app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/{user}/followers"))
            .to_request(),
    )
    .await
}

async fn posts_as<S>(app: &S, user: &str, follower: Option<&str>) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let mut request = actix_test::TestRequest::get().uri(&format!("/api/v1/users/{user}/posts"));
    if let Some(follower) = follower {
        request = request.insert_header(("followerId", follower));
    }
    call(app, request.to_request()).await
}

async fn publish<S>(app: &S, user: &str, text: &str)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, _) = call(
        app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{user}/posts"))
            .set_json(json!({ "text": text }))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

fn fresh_state() -> web::Data<social_backend::inbound::http::state::HttpState> {
    web::Data::new(in_memory_http_state(Arc::new(DefaultClock)))
}

#[actix_web::test]
async fn follow_list_unfollow_round_trip() {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;
    let b = create_user(&app, "cicrano", 31).await;

    assert_eq!(follow(&app, &a, &b).await, StatusCode::NO_CONTENT);
    let (status, body) = followers(&app, &a).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["followersCount"], 1);
    assert_eq!(body["content"][0]["id"], b.as_str());
    assert_eq!(body["content"][0]["name"], "cicrano");

    assert_eq!(unfollow(&app, &a, &b).await, StatusCode::NO_CONTENT);
    let (_, body) = followers(&app, &a).await;
    assert_eq!(body["followersCount"], 0);
    assert_eq!(body["content"], json!([]));
}

#[actix_web::test]
async fn following_unlocks_posts() {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;
    let c = create_user(&app, "beltrano", 40).await;
    publish(&app, &a, "Hello").await;

    let (status, body) = posts_as(&app, &a, Some(&c)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You can't see these posts");

    assert_eq!(follow(&app, &a, &c).await, StatusCode::NO_CONTENT);
    let (status, body) = posts_as(&app, &a, Some(&c)).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().expect("post list");
    assert_eq!(posts.len(), 1);
    let post = posts.first().expect("one post");
    assert_eq!(post["text"], "Hello");
    assert!(post["dateTime"].is_string());
}

#[rstest]
#[case::missing(None, "You forgot the header followerId")]
#[case::unknown(Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"), "Inexistent followerId")]
#[actix_web::test]
async fn listing_posts_needs_a_known_follower(
    #[case] follower: Option<&str>,
    #[case] message: &str,
) {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;

    let (status, body) = posts_as(&app, &a, follower).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], message);
}

#[actix_web::test]
async fn missing_header_wins_even_for_followers() {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;
    let b = create_user(&app, "cicrano", 31).await;
    assert_eq!(follow(&app, &a, &b).await, StatusCode::NO_CONTENT);

    let (status, body) = posts_as(&app, &a, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You forgot the header followerId");
}

#[actix_web::test]
async fn deleting_a_user_cascades() {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;
    let b = create_user(&app, "cicrano", 31).await;
    let c = create_user(&app, "beltrano", 40).await;
    assert_eq!(follow(&app, &a, &b).await, StatusCode::NO_CONTENT);
    assert_eq!(follow(&app, &b, &a).await, StatusCode::NO_CONTENT);
    assert_eq!(follow(&app, &c, &a).await, StatusCode::NO_CONTENT);
    publish(&app, &b, "bye").await;

    let (status, _) = call(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{b}"))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = followers(&app, &a).await;
    assert_eq!(body["followersCount"], 0);
    let (status, _) = followers(&app, &b).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = followers(&app, &c).await;
    assert_eq!(body["followersCount"], 1);
    let (status, _) = posts_as(&app, &b, Some(&a)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn self_follow_is_rejected() {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        fresh_state(),
    ))
    .await;
    let a = create_user(&app, "fulano", 30).await;

    assert_eq!(follow(&app, &a, &a).await, StatusCode::CONFLICT);
    let (_, body) = followers(&app, &a).await;
    assert_eq!(body["followersCount"], 0);
}
