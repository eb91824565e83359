use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DisasterArea {
    pub id: String,
    pub name: String,
    pub township: Option<String>,
    pub county: Option<String>,
    pub center_lat: f64,
    pub center_lng: f64,
    pub bounds: Option<Json<Bounds>>,
    pub grid_size: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Boundary rectangle of an incident zone. The north/south and east/west
/// ordering is deliberately not checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Creation payload for a disaster area. The id is assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDisasterArea {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub township: Option<String>,
    pub county: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "center_lat must be between -90 and 90"))]
    pub center_lat: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "center_lng must be between -180 and 180"
    ))]
    pub center_lng: f64,
    pub bounds: Option<Bounds>,
    #[validate(range(min = 1, message = "grid_size must be a positive integer"))]
    pub grid_size: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Partial-update payload: the creation schema with every field optional.
/// A JSON `null` counts as "field absent", not as a write of NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDisasterArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub township: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -90.0, max = 90.0, message = "center_lat must be between -90 and 90"))]
    pub center_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "center_lng must be between -180 and 180"
    ))]
    pub center_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "grid_size must be a positive integer"))]
    pub grid_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateDisasterArea {
    /// Field-name → value mapping of exactly the supplied fields.
    pub fn into_field_map(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
