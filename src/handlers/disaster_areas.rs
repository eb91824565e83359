use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use super::parse_payload;
use crate::database::models::{CreateDisasterArea, UpdateDisasterArea};
use crate::database::{disaster_areas, DatabaseError};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /disaster-areas - all areas in store order
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let pool = state.pool()?;
    let areas = disaster_areas::list(pool).await?;
    Ok(Json(areas))
}

/// POST /disaster-areas - create a new area, id assigned by the service
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateDisasterArea = parse_payload(body)?;
    let pool = state.pool()?;
    let created = disaster_areas::create(pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /disaster-areas/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = state.pool()?;
    match disaster_areas::get(pool, &id).await? {
        Some(area) => Ok(Json(area)),
        None => Err(ApiError::not_found()),
    }
}

/// PUT /disaster-areas/:id - partial update of the supplied fields only
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: UpdateDisasterArea = parse_payload(body)?;
    let pool = state.pool()?;

    match disaster_areas::update(pool, &id, payload.into_field_map()).await {
        Ok(Some(area)) => Ok(Json(area)),
        Ok(None) => Err(ApiError::not_found()),
        // Allow-list mismatch is an internal fault downgraded to a client
        // error; the schema normally strips unknown keys before this point.
        Err(err @ DatabaseError::InvalidFieldName(_)) => {
            tracing::warn!(
                endpoint = "PUT /disaster-areas/:id",
                error = %err,
                "Invalid field name attempted"
            );
            Err(ApiError::bad_request("Invalid field name"))
        }
        Err(other) => Err(other.into()),
    }
}

/// DELETE /disaster-areas/:id - physical delete; missing rows are 404
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = state.pool()?;
    if disaster_areas::delete(pool, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found())
    }
}
