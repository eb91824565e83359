use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{disaster_areas, volunteer_registrations};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(disaster_area_routes())
        // Protected
        .merge(volunteer_registration_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn disaster_area_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/disaster-areas",
            get(disaster_areas::list).post(disaster_areas::create),
        )
        .route(
            "/disaster-areas/:id",
            get(disaster_areas::get)
                .put(disaster_areas::update)
                .delete(disaster_areas::delete),
        )
}

fn volunteer_registration_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/volunteer-registrations",
            get(volunteer_registrations::list).post(volunteer_registrations::create),
        )
        .route(
            "/volunteer-registrations/:id",
            axum::routing::delete(volunteer_registrations::delete),
        )
        // Authentication must approve the request before any handler body runs
        .route_layer(axum::middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "relief-grid-api",
        "version": version,
        "description": "Disaster-response coordination API",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "disaster_areas": "/disaster-areas[/:id] (public)",
            "volunteer_registrations": "/volunteer-registrations[/:id] (protected)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match &state.db {
        Some(pool) => match crate::database::health_check(pool).await {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
            ),
            Err(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                })),
            ),
        },
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded", "timestamp": now, "database": "not configured" })),
        ),
    }
}
