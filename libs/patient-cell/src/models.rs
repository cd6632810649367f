use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use thiserror::Error;

use scheduling_cell::models::BookingRecord;
use shared_models::professional::hhmm;

/// The three screens of the patient booking flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectProvider,
    SelectSlot,
    Confirm,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("select a professional and a service before continuing")]
    ProviderSelectionIncomplete,

    #[error("select a date and a time before continuing")]
    SlotSelectionIncomplete,

    #[error("unknown professional")]
    UnknownProfessional,

    #[error("unknown service")]
    UnknownService,

    #[error("time is not among the offered slots")]
    TimeNotOffered,

    #[error("booking can only be confirmed on the final step")]
    NotOnConfirmStep,

    #[error("patient name is required")]
    PatientRequired,
}

/// Result of the final confirmation step. `SlotTaken` is an expected
/// outcome: the wizard drops back to slot selection so the caller can
/// re-query availability and offer a fresh pick.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(BookingRecord),
    SlotTaken,
}

/// What the confirmation screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub professional_name: String,
    pub service_name: String,
    pub price: f64,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
}
