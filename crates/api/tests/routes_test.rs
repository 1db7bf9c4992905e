//! Router tests that stop before the database.
//!
//! The state carries a disconnected pool, so every case here exercises
//! routing, authentication, or input validation only.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use salesbook_api::{AppState, create_router};
use salesbook_core::insights::InsightService;
use salesbook_shared::{JwtConfig, JwtService};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "test-secret";

fn jwt(expires_secs: i64) -> JwtService {
    JwtService::new(JwtConfig {
        secret: SECRET.to_string(),
        token_expires_secs: expires_secs,
    })
}

fn app() -> Router {
    create_router(AppState {
        db: Arc::new(DatabaseConnection::Disconnected),
        jwt_service: Arc::new(jwt(3600)),
        insights: InsightService::default(),
    })
}

fn token() -> String {
    jwt(3600).issue_token(Uuid::now_v7(), "demo@exemplo.com").unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn detail_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_on_both_paths() {
    for uri in ["/health", "/api/health"] {
        let (status, body) = send(get(uri, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(get("/api/nope", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    for uri in [
        "/api/sales",
        "/api/clients",
        "/api/auth/me",
        "/api/sales/export/csv",
        "/api/clients/Ana/sales",
    ] {
        let (status, body) = send(get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"], "missing_token");
    }

    let (status, _) = send(json_request("POST", "/api/insights/generate", None, &json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    for auth in ["Token abc", "Bearer", "Bearer a b"] {
        let (status, body) = send(get("/api/sales", Some(auth))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{auth}");
        assert_eq!(body["error"], "missing_token");
    }
}

#[tokio::test]
async fn test_invalid_and_expired_tokens() {
    let (status, body) = send(get("/api/sales", Some("Bearer not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");

    let foreign = JwtService::new(JwtConfig {
        secret: "other-secret".to_string(),
        token_expires_secs: 3600,
    })
    .issue_token(Uuid::now_v7(), "x@exemplo.com")
    .unwrap();
    let (status, body) = send(get("/api/sales", Some(&format!("Bearer {foreign}")))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");

    let expired = jwt(-7200).issue_token(Uuid::now_v7(), "x@exemplo.com").unwrap();
    let (status, body) = send(get("/api/sales", Some(&format!("Bearer {expired}")))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_expired");
}

#[tokio::test]
async fn test_create_sale_validation_with_lowercase_scheme() {
    let auth = format!("bearer {}", token());
    let body = json!({ "clientName": "", "itemSold": "Bolo", "value": -5, "date": "2025-13-01" });

    let (status, body) = send(json_request("POST", "/api/sales", Some(&auth), &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(detail_fields(&body), vec!["clientName", "value", "date"]);
}

#[tokio::test]
async fn test_create_sale_rejects_values_the_ledger_cannot_hold() {
    let auth = format!("Bearer {}", token());

    for value in ["0.001", "12.345", "12345678901.5"] {
        let body = json!({
            "clientName": "Ana",
            "itemSold": "x".repeat(256),
            "value": value,
            "date": "2025-12-01",
        });

        let (status, body) = send(json_request("POST", "/api/sales", Some(&auth), &body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "value {value}");
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(detail_fields(&body), vec!["itemSold", "value"]);
    }
}

#[tokio::test]
async fn test_create_sale_rejects_non_json_body() {
    let auth = format!("Bearer {}", token());
    let request = Request::builder()
        .method("POST")
        .uri("/api/sales")
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{oops"))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), vec!["body"]);
}

#[tokio::test]
async fn test_list_sales_rejects_bad_dates() {
    let auth = format!("Bearer {}", token());

    let (status, body) = send(get("/api/sales?startDate=2025-1-1&status=late", Some(&auth))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), vec!["startDate", "status"]);
}

#[tokio::test]
async fn test_status_update_validation() {
    let auth = format!("Bearer {}", token());

    let (status, body) = send(json_request(
        "PATCH",
        "/api/sales/not-a-uuid/status",
        Some(&auth),
        &json!({ "status": "paid" }),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let uri = format!("/api/sales/{}/status", Uuid::now_v7());
    let (status, body) = send(json_request("PATCH", &uri, Some(&auth), &json!({ "status": "late" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), vec!["status"]);
}

#[tokio::test]
async fn test_delete_with_non_uuid_is_not_found() {
    let auth = format!("Bearer {}", token());
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/sales/42")
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_validation_runs_before_store() {
    let (status, body) = send(json_request(
        "POST",
        "/api/auth/register",
        None,
        &json!({ "email": "nope", "password": "123", "name": "A" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), vec!["email", "password", "name"]);
}

#[tokio::test]
async fn test_login_validation_runs_before_store() {
    let (status, body) = send(json_request(
        "POST",
        "/api/auth/login",
        None,
        &json!({ "email": "demo@exemplo.com", "password": "" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), vec!["password"]);
}
