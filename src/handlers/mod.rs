pub mod disaster_areas;
pub mod volunteer_registrations;

use serde_json::Value;
use validator::Validate;

use crate::error::{ApiError, Issue};

/// Deserialize and validate an untrusted JSON body into a payload type.
/// Shape errors and constraint violations both surface as 400 with an
/// itemized issue list.
pub(crate) fn parse_payload<T>(body: Value) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_value(body)
        .map_err(|e| ApiError::invalid_payload(vec![Issue::new("body", e.to_string())]))?;
    payload.validate()?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{CreateDisasterArea, CreateVolunteerRegistration};
    use serde_json::json;

    #[test]
    fn shape_errors_surface_as_body_issues() {
        let err = parse_payload::<CreateDisasterArea>(json!({
            "name": "Hualien flood zone",
            "center_lat": "not a number",
            "center_lng": 121.6
        }))
        .unwrap_err();

        let body = err.to_json();
        assert_eq!(body["message"], "Invalid payload");
        assert_eq!(body["issues"][0]["path"], "body");
    }

    #[test]
    fn constraint_violations_name_the_field() {
        let err = parse_payload::<CreateDisasterArea>(json!({
            "name": "Hualien flood zone",
            "center_lat": 91.0,
            "center_lng": 121.6
        }))
        .unwrap_err();

        let body = err.to_json();
        let issues = body["issues"].as_array().unwrap();
        assert!(issues.iter().any(|i| i["path"] == "center_lat"));
    }

    #[test]
    fn valid_payload_parses() {
        let payload = parse_payload::<CreateVolunteerRegistration>(json!({
            "grid_id": "grid-7",
            "user_id": "user-1"
        }))
        .unwrap();
        assert_eq!(payload.grid_id, "grid-7");
    }
}
