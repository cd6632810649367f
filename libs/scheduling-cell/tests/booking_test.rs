use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use scheduling_cell::models::ReservationOutcome;
use scheduling_cell::services::availability::{format_slots, SlotService};
use scheduling_cell::services::booking::BookingService;
use shared_models::professional::{AvailabilityWindow, Professional, TimeSlot};
use shared_store::{seed, ProfessionalStore};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[tokio::test]
async fn first_booking_wins_and_the_ledger_keeps_the_first_patient() {
    let store = ProfessionalStore::with_seed_data();
    let booking_service = BookingService::new(store.clone());

    // 11:00 on 2025-11-20 exists in Gisele's ledger as a free row.
    let first = booking_service
        .reserve(seed::GISELE_ID, date(20), time(11, 0), "Patient A")
        .await;
    let second = booking_service
        .reserve(seed::GISELE_ID, date(20), time(11, 0), "Patient B")
        .await;

    assert_eq!(first, ReservationOutcome::Booked);
    assert_eq!(second, ReservationOutcome::SlotTaken);

    let professional = store.get_professional(seed::GISELE_ID).await.unwrap();
    let slot = professional.schedule[&date(20)]
        .iter()
        .find(|slot| slot.time == time(11, 0))
        .unwrap();
    assert_eq!(slot.patient.as_deref(), Some("Patient A"));
}

#[tokio::test]
async fn booking_a_fresh_time_creates_the_ledger_row() {
    let store = ProfessionalStore::with_seed_data();
    let booking_service = BookingService::new(store.clone());

    let before = store.get_professional(seed::GISELE_ID).await.unwrap();
    assert!(!before.schedule.contains_key(&date(24)));
    let other_dates: Vec<NaiveDate> = before.schedule.keys().copied().collect();

    let outcome = booking_service
        .reserve(seed::GISELE_ID, date(24), time(9, 0), "Novo Paciente")
        .await;
    assert_eq!(outcome, ReservationOutcome::Booked);

    let after = store.get_professional(seed::GISELE_ID).await.unwrap();
    assert_eq!(
        after.schedule[&date(24)],
        vec![TimeSlot {
            time: time(9, 0),
            patient: Some("Novo Paciente".to_string()),
        }]
    );

    // Other dates are untouched.
    for other in other_dates {
        assert_eq!(after.schedule[&other], before.schedule[&other]);
    }
}

#[tokio::test]
async fn unknown_professional_is_rejected() {
    let store = ProfessionalStore::with_seed_data();
    let booking_service = BookingService::new(store);

    let outcome = booking_service
        .reserve(Uuid::new_v4(), date(20), time(11, 0), "Anyone")
        .await;

    assert_eq!(outcome, ReservationOutcome::UnknownProfessional);
}

#[tokio::test]
async fn booked_slot_disappears_from_the_generator() {
    // Professional P: 09:00-12:00, no lunch break, 10:00 occupied.
    let professional_id = Uuid::new_v4();
    let mut schedule = BTreeMap::new();
    schedule.insert(
        date(20),
        vec![TimeSlot {
            time: time(10, 0),
            patient: Some("X".to_string()),
        }],
    );
    let mut availability = BTreeMap::new();
    availability.insert(
        date(20),
        Some(AvailabilityWindow {
            start: time(9, 0),
            end: time(12, 0),
            lunch_break: None,
        }),
    );

    let store = ProfessionalStore::new(
        vec![Professional {
            id: professional_id,
            name: "P".to_string(),
            role: "Psicóloga".to_string(),
            availability,
            schedule,
        }],
        Vec::new(),
    );
    let slot_service = SlotService::new(store.clone());
    let booking_service = BookingService::new(store);

    let slots = slot_service.available_slots(professional_id, date(20)).await;
    assert_eq!(format_slots(&slots), vec!["09:00", "11:00"]);

    let outcome = booking_service
        .reserve(professional_id, date(20), time(11, 0), "Y")
        .await;
    assert_eq!(outcome, ReservationOutcome::Booked);

    let slots = slot_service.available_slots(professional_id, date(20)).await;
    assert_eq!(format_slots(&slots), vec!["09:00"]);
}

#[tokio::test]
async fn concurrent_reservations_on_the_same_slot_serialize() {
    let store = ProfessionalStore::with_seed_data();

    // 14:00 on 2025-11-20 is a free row in Gisele's ledger.
    let task_a = {
        let booking_service = BookingService::new(store.clone());
        tokio::spawn(async move {
            booking_service
                .reserve(seed::GISELE_ID, date(20), time(14, 0), "Racer A")
                .await
        })
    };
    let task_b = {
        let booking_service = BookingService::new(store.clone());
        tokio::spawn(async move {
            booking_service
                .reserve(seed::GISELE_ID, date(20), time(14, 0), "Racer B")
                .await
        })
    };

    let (outcome_a, outcome_b) = (task_a.await.unwrap(), task_b.await.unwrap());

    let booked = [outcome_a, outcome_b]
        .iter()
        .filter(|outcome| **outcome == ReservationOutcome::Booked)
        .count();
    let taken = [outcome_a, outcome_b]
        .iter()
        .filter(|outcome| **outcome == ReservationOutcome::SlotTaken)
        .count();
    assert_eq!((booked, taken), (1, 1));

    // The ledger holds exactly the winner, never both.
    let professional = store.get_professional(seed::GISELE_ID).await.unwrap();
    let occupants: Vec<&TimeSlot> = professional.schedule[&date(20)]
        .iter()
        .filter(|slot| slot.time == time(14, 0))
        .collect();
    assert_eq!(occupants.len(), 1);
    let winner = if outcome_a == ReservationOutcome::Booked {
        "Racer A"
    } else {
        "Racer B"
    };
    assert_eq!(occupants[0].patient.as_deref(), Some(winner));
}
