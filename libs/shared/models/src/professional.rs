use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Slot granularity used when none is requested explicitly. The demo
/// calendars are laid out on a 60-minute grid.
pub const DEFAULT_SLOT_MINUTES: i64 = 60;

/// `HH:MM` wire format for times of day.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A healthcare professional with an editable availability calendar and
/// a booking ledger.
///
/// `availability` and `schedule` are eventually-consistent: slots can be
/// booked directly without re-deriving them from the availability window
/// for that date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    /// `Some(window)` = working day, `None` = explicit day off, absent
    /// key = closed.
    #[serde(default)]
    pub availability: BTreeMap<NaiveDate, Option<AvailabilityWindow>>,
    #[serde(default)]
    pub schedule: BTreeMap<NaiveDate, Vec<TimeSlot>>,
}

impl Professional {
    pub fn day_schedule(&self, date: NaiveDate) -> &[TimeSlot] {
        self.schedule.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Bookable hours for one calendar date, half-open `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break: Option<LunchBreak>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchBreak {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidWindow {
    #[error("start time must be before end time")]
    StartNotBeforeEnd,

    #[error("lunch break start must be before lunch break end")]
    BreakStartNotBeforeEnd,

    #[error("lunch break must fall within the working window")]
    BreakOutsideWindow,
}

impl AvailabilityWindow {
    pub fn validate(&self) -> Result<(), InvalidWindow> {
        if self.start >= self.end {
            return Err(InvalidWindow::StartNotBeforeEnd);
        }

        if let Some(lunch_break) = &self.lunch_break {
            if lunch_break.start >= lunch_break.end {
                return Err(InvalidWindow::BreakStartNotBeforeEnd);
            }
            if lunch_break.start < self.start || lunch_break.end > self.end {
                return Err(InvalidWindow::BreakOutsideWindow);
            }
        }

        Ok(())
    }
}

/// One row of the booking ledger. A row without a patient is a free
/// placeholder and does not block the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
}

impl TimeSlot {
    pub fn is_occupied(&self) -> bool {
        self.patient.as_deref().is_some_and(|patient| !patient.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicService {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
