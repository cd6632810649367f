//! Deterministic demo data for the Equilibrium clinic, used by tests
//! and by the server when no real data source is wired up.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use shared_models::professional::{
    AvailabilityWindow, ClinicService, LunchBreak, Professional, TimeSlot,
};

pub const GISELE_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0001_4c4e_8a11_000000000001);
pub const JULIANA_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0001_4c4e_8a11_000000000002);

pub const PSYCHOTHERAPY_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0002_4c4e_8a11_000000000001);
pub const NEURO_ASSESSMENT_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0002_4c4e_8a11_000000000002);
pub const VOCATIONAL_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0002_4c4e_8a11_000000000003);
pub const PARENT_GUIDANCE_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0002_4c4e_8a11_000000000004);
pub const SUPERVISION_ID: Uuid = Uuid::from_u128(0x9e7c_1a0f_0002_4c4e_8a11_000000000005);

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn full_day() -> AvailabilityWindow {
    AvailabilityWindow {
        start: time(9, 0),
        end: time(18, 0),
        lunch_break: Some(LunchBreak {
            start: time(12, 0),
            end: time(13, 0),
        }),
    }
}

fn window(start: NaiveTime, end: NaiveTime, lunch_break: Option<LunchBreak>) -> AvailabilityWindow {
    AvailabilityWindow {
        start,
        end,
        lunch_break,
    }
}

fn free(hour: u32, minute: u32) -> TimeSlot {
    TimeSlot {
        time: time(hour, minute),
        patient: None,
    }
}

fn booked(hour: u32, minute: u32, patient: &str) -> TimeSlot {
    TimeSlot {
        time: time(hour, minute),
        patient: Some(patient.to_string()),
    }
}

pub fn demo_clinic() -> (Vec<Professional>, Vec<ClinicService>) {
    (
        vec![gisele(), juliana()],
        vec![
            ClinicService {
                id: PSYCHOTHERAPY_ID,
                name: "Psicoterapia".to_string(),
                price: 280.0,
                instructions: Some(
                    "Nenhuma preparação específica é necessária. A sessão tem duração de 50 minutos."
                        .to_string(),
                ),
            },
            ClinicService {
                id: NEURO_ASSESSMENT_ID,
                name: "Avaliação Neuropsicológica".to_string(),
                price: 1500.0,
                instructions: Some(
                    "É recomendado ter uma boa noite de sono antes da avaliação. O processo pode levar algumas sessões para ser concluído."
                        .to_string(),
                ),
            },
            ClinicService {
                id: VOCATIONAL_ID,
                name: "Orientação Vocacional".to_string(),
                price: 600.0,
                instructions: None,
            },
            ClinicService {
                id: PARENT_GUIDANCE_ID,
                name: "Orientação a Pais".to_string(),
                price: 300.0,
                instructions: None,
            },
            ClinicService {
                id: SUPERVISION_ID,
                name: "Supervisão para Psicólogos".to_string(),
                price: 350.0,
                instructions: None,
            },
        ],
    )
}

fn gisele() -> Professional {
    let mut availability = BTreeMap::new();
    // November 2025: Monday-Thursday full days, Fridays without a break.
    for day in [3, 4, 5, 6, 10, 11, 12, 13, 17, 18, 19, 20, 24, 25, 26, 27] {
        availability.insert(date(day), Some(full_day()));
    }
    for day in [7, 14, 21, 28] {
        availability.insert(date(day), Some(window(time(9, 0), time(17, 0), None)));
    }

    let mut schedule = BTreeMap::new();
    schedule.insert(
        date(20),
        vec![
            booked(10, 0, "Lucas Mendes"),
            free(11, 0),
            free(14, 0),
            booked(15, 0, "Ana Clara"),
        ],
    );
    schedule.insert(
        date(21),
        vec![
            free(9, 0),
            free(10, 0),
            free(11, 0),
            booked(13, 0, "Fernanda Lima"),
        ],
    );

    Professional {
        id: GISELE_ID,
        name: "Gisele T. L. S. Rosa".to_string(),
        role: "Psicóloga (CRP 06/12345)".to_string(),
        availability,
        schedule,
    }
}

fn juliana() -> Professional {
    let lunch = || {
        Some(LunchBreak {
            start: time(12, 0),
            end: time(13, 0),
        })
    };

    let mut availability = BTreeMap::new();
    for day in [17, 18, 24, 25] {
        availability.insert(date(day), Some(window(time(8, 0), time(17, 0), lunch())));
    }
    for day in [19, 26] {
        availability.insert(date(day), Some(window(time(8, 0), time(12, 0), None)));
    }
    for day in [21, 28] {
        availability.insert(date(day), Some(window(time(13, 0), time(18, 0), None)));
    }
    // Explicit days off.
    availability.insert(date(20), None);
    availability.insert(date(27), None);

    let mut schedule = BTreeMap::new();
    schedule.insert(
        date(20),
        vec![booked(8, 0, "Diego"), free(9, 0), free(10, 0), free(14, 0)],
    );
    schedule.insert(date(21), vec![free(13, 0), free(14, 0), free(15, 0)]);

    Professional {
        id: JULIANA_ID,
        name: "Juliana Bueno".to_string(),
        role: "Neuropsicóloga (CRP 06/54321)".to_string(),
        availability,
        schedule,
    }
}
