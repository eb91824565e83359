#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use relief_grid_api::auth::{generate_jwt, Claims};
use relief_grid_api::config::{
    AppConfig, DatabaseConfig, Environment, SecurityConfig, ServerConfig,
};
use relief_grid_api::routes;
use relief_grid_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        database: DatabaseConfig { url: None, max_connections: 1, connect_timeout_secs: 1 },
        security: SecurityConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_expiry_hours: 1,
        },
    }
}

/// Router wired to a store-less state, so every store-dependent path
/// exercises its degraded behavior and nothing touches a live database.
pub fn app() -> Router {
    routes::app(AppState::new(None, test_config()))
}

pub fn bearer_token() -> String {
    let claims = Claims::new("user-1", 1);
    generate_jwt(&claims, TEST_JWT_SECRET).expect("test token")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn get_authed(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", bearer_token()))
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn json_request_authed(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", bearer_token()))
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).expect("request")
}

pub fn delete_authed(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", bearer_token()))
        .body(Body::empty())
        .expect("request")
}

/// Drive one request through the router and decode the JSON body
/// (Null for empty bodies such as 204 responses).
pub async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

pub fn issue_paths(body: &Value) -> Vec<String> {
    body["issues"]
        .as_array()
        .map(|issues| {
            issues
                .iter()
                .filter_map(|i| i["path"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
