use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use shared_models::professional::{AvailabilityWindow, TimeSlot, DEFAULT_SLOT_MINUTES};
use shared_store::ProfessionalStore;

/// Read-only slot queries against the store.
pub struct SlotService {
    store: ProfessionalStore,
}

impl SlotService {
    pub fn new(store: ProfessionalStore) -> Self {
        Self { store }
    }

    /// Free bookable times for a professional on a date.
    ///
    /// Total over its inputs: an unknown professional, an absent
    /// availability entry, and an explicit day off all yield an empty
    /// list rather than an error.
    pub async fn available_slots(&self, professional_id: Uuid, date: NaiveDate) -> Vec<NaiveTime> {
        let Some(professional) = self.store.get_professional(professional_id).await else {
            debug!("Slot query for unknown professional {}", professional_id);
            return Vec::new();
        };

        let Some(Some(window)) = professional.availability.get(&date) else {
            // Absent or explicit day off.
            return Vec::new();
        };

        let slots = free_slots(window, professional.day_schedule(date), DEFAULT_SLOT_MINUTES);
        debug!(
            "Found {} free slots for {} on {}",
            slots.len(),
            professional.name,
            date
        );
        slots
    }
}

/// Walk the working window in `slot_minutes` steps, emitting every
/// candidate that is neither inside the lunch break nor already booked.
///
/// A ledger entry without a patient does not block its time; any entry
/// with a patient does, whether it was booked or administratively
/// blocked.
pub fn free_slots(
    window: &AvailabilityWindow,
    day_schedule: &[TimeSlot],
    slot_minutes: i64,
) -> Vec<NaiveTime> {
    if slot_minutes <= 0 {
        return Vec::new();
    }

    let occupied: HashSet<NaiveTime> = day_schedule
        .iter()
        .filter(|slot| slot.is_occupied())
        .map(|slot| slot.time)
        .collect();

    let step = Duration::minutes(slot_minutes);
    let mut slots = Vec::new();
    let mut current = window.start;

    while current < window.end {
        let in_break = window
            .lunch_break
            .as_ref()
            .is_some_and(|lunch| current >= lunch.start && current < lunch.end);

        if !in_break && !occupied.contains(&current) {
            slots.push(current);
        }

        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            // Stepped past midnight.
            break;
        }
        current = next;
    }

    slots
}

pub fn format_slots(slots: &[NaiveTime]) -> Vec<String> {
    slots
        .iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect()
}
