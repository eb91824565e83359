use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VolunteerRegistration {
    pub id: String,
    pub grid_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. Both references must be present and non-empty;
/// whether the grid cell actually exists is not checked at this layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVolunteerRegistration {
    #[validate(length(min = 1, message = "grid_id must not be empty"))]
    pub grid_id: String,
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_references() {
        let payload = CreateVolunteerRegistration {
            grid_id: "grid-7".to_string(),
            user_id: "user-1".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_empty_grid_id() {
        let payload = CreateVolunteerRegistration {
            grid_id: String::new(),
            user_id: "user-1".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("grid_id"));
    }

    #[test]
    fn rejects_empty_user_id() {
        let payload = CreateVolunteerRegistration {
            grid_id: "grid-7".to_string(),
            user_id: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }
}
