pub mod disaster_area;
pub mod volunteer_registration;

pub use disaster_area::{Bounds, CreateDisasterArea, DisasterArea, UpdateDisasterArea};
pub use volunteer_registration::{CreateVolunteerRegistration, VolunteerRegistration};
