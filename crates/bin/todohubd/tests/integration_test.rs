//! End-to-end smoke tests for the full todohubd stack.
//!
//! Each test spins up the complete application (real in-memory store, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use todohub_adapter_http_axum::router;
use todohub_adapter_http_axum::state::AppState;
use todohub_adapter_storage_memory::InMemoryTodoStore;
use todohub_app::services::todo_service::TodoService;
use tower::ServiceExt;

/// Build a fully-wired router backed by a fresh in-memory store.
fn app() -> axum::Router {
    let state = AppState::new(TodoService::new(InMemoryTodoStore::new()));
    router::build(state)
}

async fn call(app: &axum::Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

async fn call_json(app: &axum::Router, method: Method, uri: &str, body: &str) -> Value {
    let (status, body) = call(app, method, uri, body).await;
    assert_eq!(status, StatusCode::OK, "unexpected status for {uri}: {body}");
    serde_json::from_str(&body).unwrap()
}

fn describe(text: &str) -> String {
    json!({ "Description": text }).to_string()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = call(&app(), Method::GET, "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Todo lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_assign_ids_in_creation_order() {
    let app = app();

    for n in 0..5 {
        let created = call_json(&app, Method::POST, "/todos", &describe(&format!("task {n}"))).await;
        assert_eq!(created["Id"], n);
    }

    let all = call_json(&app, Method::GET, "/todos", "").await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn should_complete_todo_crud_cycle() {
    let app = app();

    // Create
    let created = call_json(&app, Method::POST, "/todos", &describe("walk the dog")).await;
    assert_eq!(created, json!({"Id": 0, "Description": "walk the dog"}));

    // Get
    let fetched = call_json(&app, Method::GET, "/todos/0", "").await;
    assert_eq!(fetched, created);

    // Replace
    let replaced = call_json(&app, Method::PUT, "/todos/0", &describe("walk the cat")).await;
    assert_eq!(replaced, json!({"Id": 0, "Description": "walk the cat"}));

    // List
    let all = call_json(&app, Method::GET, "/todos", "").await;
    assert_eq!(all, json!([{"Id": 0, "Description": "walk the cat"}]));

    // Delete
    let removed = call_json(&app, Method::DELETE, "/todos/0", "").await;
    assert_eq!(removed, json!({"Id": 0, "Description": "walk the cat"}));

    // Gone, but still answered with an empty description
    let fetched = call_json(&app, Method::GET, "/todos/0", "").await;
    assert_eq!(fetched, json!({"Id": 0, "Description": ""}));

    let all = call_json(&app, Method::GET, "/todos", "").await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn should_treat_put_without_id_like_post() {
    let via_put = app();
    let via_post = app();

    let put = call_json(&via_put, Method::PUT, "/todos/", &describe("x")).await;
    let post = call_json(&via_post, Method::POST, "/todos", &describe("x")).await;
    assert_eq!(put, post);

    let next = call_json(&via_put, Method::POST, "/todos", &describe("y")).await;
    assert_eq!(next["Id"], 1);
}

#[tokio::test]
async fn should_keep_counter_when_put_uses_explicit_id() {
    let app = app();

    let explicit = call_json(&app, Method::PUT, "/todos/5", &describe("y")).await;
    assert_eq!(explicit, json!({"Id": 5, "Description": "y"}));

    let first = call_json(&app, Method::POST, "/todos", &describe("a")).await;
    assert_eq!(first["Id"], 0);

    let all = call_json(&app, Method::GET, "/todos", "").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_let_post_overwrite_explicit_id_at_counter() {
    let app = app();

    call_json(&app, Method::PUT, "/todos/0", &describe("explicit")).await;
    let created = call_json(&app, Method::POST, "/todos", &describe("counted")).await;
    assert_eq!(created["Id"], 0);

    let fetched = call_json(&app, Method::GET, "/todos/0", "").await;
    assert_eq!(fetched["Description"], "counted");
}

#[tokio::test]
async fn should_not_reuse_ids_after_delete() {
    let app = app();

    call_json(&app, Method::POST, "/todos", &describe("a")).await;
    call_json(&app, Method::DELETE, "/todos/0", "").await;

    let created = call_json(&app, Method::POST, "/todos", &describe("b")).await;
    assert_eq!(created["Id"], 1);
}

#[tokio::test]
async fn should_store_empty_description_when_body_malformed() {
    let app = app();

    let created = call_json(&app, Method::POST, "/todos", "definitely not json").await;
    assert_eq!(created, json!({"Id": 0, "Description": ""}));
}

#[tokio::test]
async fn should_read_description_regardless_of_field_case() {
    let app = app();

    let created = call_json(&app, Method::POST, "/todos", r#"{"DESCRIPTION":"shout"}"#).await;
    assert_eq!(created, json!({"Id": 0, "Description": "shout"}));

    let replaced = call_json(
        &app,
        Method::PUT,
        "/todos/0",
        r#"{"description":"first","Description":"second"}"#,
    )
    .await;
    assert_eq!(replaced["Description"], "second");
}

#[tokio::test]
async fn should_ignore_path_below_todo_id() {
    let app = app();
    call_json(&app, Method::POST, "/todos", &describe("nested")).await;

    let fetched = call_json(&app, Method::GET, "/todos/0/details", "").await;
    assert_eq!(fetched, json!({"Id": 0, "Description": "nested"}));

    let removed = call_json(&app, Method::DELETE, "/todos/0/anything", "").await;
    assert_eq!(removed["Description"], "nested");

    let all = call_json(&app, Method::GET, "/todos", "").await;
    assert_eq!(all, json!([]));
}

// ---------------------------------------------------------------------------
// Errors and CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_invalid_id() {
    let (status, body) = call(&app(), Method::GET, "/todos/abc", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid ID");

    let (status, body) = call(&app(), Method::DELETE, "/todos/%FF", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid ID");
}

#[tokio::test]
async fn should_set_cors_and_content_type_headers() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/todos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert_eq!(resp.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn should_answer_preflight_with_allowed_methods() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/todos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["allow"], "GET,POST");
    assert_eq!(resp.headers()["access-control-allow-methods"], "GET,POST");
    assert_eq!(resp.headers()["access-control-allow-headers"], "Content-Type");
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_hand_out_unique_ids_to_concurrent_posts() {
    let app = app();

    let handles: Vec<_> = (0..64)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                call_json(&app, Method::POST, "/todos", &describe(&format!("job {n}"))).await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let created = handle.await.unwrap();
        assert!(ids.insert(created["Id"].as_i64().unwrap()));
    }
    assert_eq!(ids, (0..64).collect::<HashSet<i64>>());
}
