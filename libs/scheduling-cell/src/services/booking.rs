use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::professional::TimeSlot;
use shared_store::ProfessionalStore;

use crate::models::ReservationOutcome;

/// The single mutating operation of the scheduling core.
pub struct BookingService {
    store: ProfessionalStore,
}

impl BookingService {
    pub fn new(store: ProfessionalStore) -> Self {
        Self { store }
    }

    /// Atomically verify the slot is free and mark it occupied.
    ///
    /// The check and the write both run inside the store's write lock,
    /// so two callers racing on the same (professional, date, time)
    /// serialize: the first gets `Booked`, the second `SlotTaken`, and
    /// the ledger keeps the first patient.
    pub async fn reserve(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        patient: &str,
    ) -> ReservationOutcome {
        debug!(
            "Reserving {} {} for professional {}",
            date, time, professional_id
        );

        let outcome = self
            .store
            .mutate_professional(professional_id, |professional| {
                let day = professional.schedule.entry(date).or_default();

                match day.iter_mut().find(|slot| slot.time == time) {
                    Some(slot) if slot.is_occupied() => ReservationOutcome::SlotTaken,
                    Some(slot) => {
                        slot.patient = Some(patient.to_string());
                        ReservationOutcome::Booked
                    }
                    None => {
                        day.push(TimeSlot {
                            time,
                            patient: Some(patient.to_string()),
                        });
                        ReservationOutcome::Booked
                    }
                }
            })
            .await
            .unwrap_or(ReservationOutcome::UnknownProfessional);

        match outcome {
            ReservationOutcome::Booked => {
                info!(
                    "Booked {} {} for professional {}",
                    date, time, professional_id
                );
            }
            ReservationOutcome::SlotTaken => {
                debug!(
                    "Rejected {} {} for professional {}: slot taken",
                    date, time, professional_id
                );
            }
            ReservationOutcome::UnknownProfessional => {
                debug!("Reservation for unknown professional {}", professional_id);
            }
        }

        outcome
    }
}
