use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use shared_models::professional::AvailabilityWindow;
use shared_store::ProfessionalStore;

use crate::error::SchedulingError;
use crate::models::{MonthRef, RecurrenceRule};

/// Calendar authoring: the only writer of `Professional::availability`.
pub struct CalendarService {
    store: ProfessionalStore,
}

impl CalendarService {
    pub fn new(store: ProfessionalStore) -> Self {
        Self { store }
    }

    /// Apply a window (or `None` for a day off) to every date in an
    /// explicit selection.
    pub async fn apply_window(
        &self,
        professional_id: Uuid,
        dates: &[NaiveDate],
        window: Option<AvailabilityWindow>,
    ) -> Result<(), SchedulingError> {
        if dates.is_empty() {
            return Err(SchedulingError::ValidationError(
                "at least one date must be selected".to_string(),
            ));
        }
        if let Some(window) = &window {
            window.validate()?;
        }

        debug!(
            "Applying availability to {} date(s) for professional {}",
            dates.len(),
            professional_id
        );

        self.store
            .mutate_professional(professional_id, |professional| {
                for date in dates {
                    professional.availability.insert(*date, window.clone());
                }
            })
            .await
            .ok_or(SchedulingError::ProfessionalNotFound(professional_id))
    }

    /// Apply a window to every date of the target month matched by the
    /// recurrence rule, anchored to the reference date. Returns the
    /// dates that were touched.
    pub async fn apply_recurrence(
        &self,
        professional_id: Uuid,
        reference_date: NaiveDate,
        month: MonthRef,
        rule: RecurrenceRule,
        window: AvailabilityWindow,
    ) -> Result<Vec<NaiveDate>, SchedulingError> {
        window.validate()?;

        let dates = recurrence_dates(reference_date, month, rule);
        debug!(
            "Applying {:?} recurrence over {} to {} date(s) for professional {}",
            rule,
            month,
            dates.len(),
            professional_id
        );

        self.store
            .mutate_professional(professional_id, |professional| {
                for date in &dates {
                    professional
                        .availability
                        .insert(*date, Some(window.clone()));
                }
            })
            .await
            .ok_or(SchedulingError::ProfessionalNotFound(professional_id))?;

        Ok(dates)
    }
}

/// Dates of the target month matched by the rule. Application always
/// clips to the month; the reference date itself is included when it
/// matches its own rule.
pub fn recurrence_dates(
    reference_date: NaiveDate,
    month: MonthRef,
    rule: RecurrenceRule,
) -> Vec<NaiveDate> {
    (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(month.year, month.month, day))
        .filter(|date| match rule {
            RecurrenceRule::Weekly => date.weekday() == reference_date.weekday(),
            RecurrenceRule::Monthly => date.day() == reference_date.day(),
            RecurrenceRule::Biweekly => {
                date.weekday() == reference_date.weekday()
                    && week_of_month(*date) % 2 == week_of_month(reference_date) % 2
            }
        })
        .collect()
}

/// Week number within the month, Sunday-anchored:
/// `ceil((day_of_month + 6 - weekday) / 7)` with Sunday = 0.
fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() + 6 - date.weekday().num_days_from_sunday()).div_ceil(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const NOV: MonthRef = MonthRef {
        year: 2025,
        month: 11,
    };

    #[test]
    fn weekly_hits_every_matching_weekday_of_the_month() {
        // 2025-11-03 is a Monday.
        let dates = recurrence_dates(d(2025, 11, 3), NOV, RecurrenceRule::Weekly);
        assert_eq!(
            dates,
            vec![
                d(2025, 11, 3),
                d(2025, 11, 10),
                d(2025, 11, 17),
                d(2025, 11, 24),
            ]
        );
    }

    #[test]
    fn biweekly_keeps_week_parity() {
        let dates = recurrence_dates(d(2025, 11, 3), NOV, RecurrenceRule::Biweekly);
        assert_eq!(dates, vec![d(2025, 11, 3), d(2025, 11, 17)]);

        let offset = recurrence_dates(d(2025, 11, 10), NOV, RecurrenceRule::Biweekly);
        assert_eq!(offset, vec![d(2025, 11, 10), d(2025, 11, 24)]);
    }

    #[test]
    fn monthly_matches_the_day_of_month() {
        let dates = recurrence_dates(d(2025, 10, 15), NOV, RecurrenceRule::Monthly);
        assert_eq!(dates, vec![d(2025, 11, 15)]);
    }

    #[test]
    fn short_months_drop_missing_days() {
        let feb = MonthRef {
            year: 2025,
            month: 2,
        };
        let dates = recurrence_dates(d(2025, 1, 31), feb, RecurrenceRule::Monthly);
        assert!(dates.is_empty());
    }

    #[test]
    fn week_of_month_is_sunday_anchored() {
        // Saturday 2025-11-01 closes week 1; Sunday 2025-11-02 opens week 2.
        assert_eq!(week_of_month(d(2025, 11, 1)), 1);
        assert_eq!(week_of_month(d(2025, 11, 2)), 2);
        assert_eq!(week_of_month(d(2025, 11, 8)), 2);
        assert_eq!(week_of_month(d(2025, 11, 9)), 3);
    }
}
