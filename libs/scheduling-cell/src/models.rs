use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use shared_models::professional::{hhmm, AvailabilityWindow};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub professional_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub patient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub patient: String,
}

/// Outcome of a reservation attempt. Rejection is a value, not an
/// error; callers re-query availability and let the user pick again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationOutcome {
    Booked,
    SlotTaken,
    UnknownProfessional,
}

#[derive(Debug, Serialize)]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyAvailabilityRequest {
    pub dates: Vec<NaiveDate>,
    /// `null` marks the selected dates as days off.
    pub window: Option<AvailabilityWindow>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRecurrenceRequest {
    pub reference_date: NaiveDate,
    pub month: MonthRef,
    pub rule: RecurrenceRule,
    pub window: AvailabilityWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceRule {
    Weekly,
    Biweekly,
    Monthly,
}

/// A calendar month, `YYYY-MM` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl FromStr for MonthRef {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| format!("invalid month '{value}', expected YYYY-MM"))?;

        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in month '{value}'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{value}'"))?;

        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in '{value}'"));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl<'de> Deserialize<'de> for MonthRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
