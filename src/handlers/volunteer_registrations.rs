use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::Value;
use uuid::Uuid;

use super::parse_payload;
use crate::database::models::CreateVolunteerRegistration;
use crate::database::volunteer_registrations;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /volunteer-registrations - newest first. An absent store degrades
/// to an empty list instead of failing the read.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let Some(pool) = state.db.as_ref() else {
        return Ok(Json(Vec::new()));
    };
    let rows = volunteer_registrations::list(pool).await?;
    Ok(Json(rows))
}

/// POST /volunteer-registrations - id generated by the service
pub async fn create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateVolunteerRegistration = parse_payload(body)?;

    let Some(pool) = state.db.as_ref() else {
        return Err(ApiError::service_unavailable("Database not ready"));
    };

    let id = Uuid::new_v4().to_string();
    tracing::debug!(user_id = %auth_user.user_id, registration_id = %id, "creating volunteer registration");

    let created = volunteer_registrations::create(pool, &id, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /volunteer-registrations/:id - idempotent; no ownership check
/// ties deletion to the original creator.
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(pool) = state.db.as_ref() else {
        return Err(ApiError::service_unavailable("Database not ready"));
    };

    tracing::debug!(user_id = %auth_user.user_id, registration_id = %id, "deleting volunteer registration");

    volunteer_registrations::delete(pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
