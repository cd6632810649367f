pub mod models;
pub mod services;

pub use services::wizard::{BookingWizard, PatientBookingService};
