//! Shared helpers for endpoint tests: a fully wired router over an
//! in-memory SQLite database, plus a small request helper.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use report_api::{create_api_router, Migrator};

/// Create a fresh application over a fresh database for each test.
pub async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    create_api_router(db)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).expect("serialize")))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.expect("read body").to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse json body")
    };

    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

pub fn user_body(email: &str, name: &str, last_name: &str) -> Value {
    json!({ "email": email, "name": name, "lastName": last_name })
}

pub fn report_body(comment: &str, hours: i32, date: &str) -> Value {
    json!({ "comment": comment, "hoursCount": hours, "date": date })
}

/// Create a user and return its assigned id.
pub async fn create_user(app: &Router, email: &str) -> i32 {
    let resp = send(
        app,
        Method::POST,
        "/api/users",
        Some(user_body(email, "Иван", "Иванов")),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.body);
    resp.body["id"].as_i64().expect("user id") as i32
}

/// Create a report for `user_id` and return its assigned id.
pub async fn create_report(app: &Router, user_id: i32, comment: &str, date: &str) -> i32 {
    let resp = send(
        app,
        Method::POST,
        &format!("/api/users/{}/reports", user_id),
        Some(report_body(comment, 8, date)),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.body);
    resp.body["id"].as_i64().expect("report id") as i32
}
