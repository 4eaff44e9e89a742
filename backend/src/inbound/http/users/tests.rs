//! Tests for user lifecycle handlers.

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::{memory_state, seed_user, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

fn error_code(body: &Value) -> Option<ErrorCode> {
    body.get("code")
        .cloned()
        .and_then(|code| serde_json::from_value(code).ok())
}

#[actix_web::test]
async fn create_returns_the_new_user() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state.clone())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "fulano", "age": 30 }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: UserResponse = actix_test::read_body_json(response).await;
    assert_eq!(created.name, "fulano");
    assert_eq!(created.age, 30);

    let stored = state
        .users
        .get(&crate::domain::UserId::from_uuid(created.id))
        .await
        .expect("user persisted");
    assert_eq!(stored.display_name().as_ref(), "fulano");
}

#[rstest]
#[case(json!({ "age": 30 }), &["name"])]
#[case(json!({ "name": "fulano" }), &["age"])]
#[case(json!({ "name": "  ", "age": -1 }), &["name", "age"])]
#[actix_web::test]
async fn invalid_profiles_are_unprocessable(#[case] body: Value, #[case] fields: &[&str]) {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(error_code(&body), Some(ErrorCode::ValidationFailed));
    assert_eq!(body["message"], "Validation Error");
    let reported: Vec<&str> = body["details"]["errors"]
        .as_array()
        .expect("violation list")
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert_eq!(reported, fields);
}

#[actix_web::test]
async fn malformed_body_is_a_bad_request() {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["code"], "malformed_body");
}

#[actix_web::test]
async fn list_returns_users_in_creation_order() {
    let (state, _clock) = memory_state();
    seed_user(&state, "fulano", 30).await;
    seed_user(&state, "cicrano", 31).await;
    let app = actix_test::init_service(test_app(state)).await;

    let users: Vec<UserResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/users").to_request(),
    )
    .await;

    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["fulano", "cicrano"]);
}

#[rstest]
#[case("/api/v1/users/3fa85f64-5717-4562-b3fc-2c963f66afa6", StatusCode::NOT_FOUND)]
#[case("/api/v1/users/not-a-uuid", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn get_rejects_unknown_or_malformed_ids(#[case] uri: &str, #[case] status: StatusCode) {
    let (state, _clock) = memory_state();
    let app = actix_test::init_service(test_app(state)).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), status);
}

#[actix_web::test]
async fn update_replaces_name_and_age() {
    let (state, _clock) = memory_state();
    let user = seed_user(&state, "fulano", 30).await;
    let app = actix_test::init_service(test_app(state)).await;
    let uri = format!("/api/v1/users/{}", user.id());

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "name": "beltrano", "age": 45 }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: UserResponse = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(fetched.name, "beltrano");
    assert_eq!(fetched.age, 45);
}

#[actix_web::test]
async fn delete_removes_the_user() {
    let (state, _clock) = memory_state();
    let user = seed_user(&state, "fulano", 30).await;
    let app = actix_test::init_service(test_app(state)).await;
    let uri = format!("/api/v1/users/{}", user.id());

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}
