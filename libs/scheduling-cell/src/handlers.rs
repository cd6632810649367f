use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::{
    ApplyAvailabilityRequest, ApplyRecurrenceRequest, AvailabilityQuery, BookSlotRequest,
    BookingRecord, ProfessionalSummary, ReservationOutcome,
};
use crate::services::{
    availability::{format_slots, SlotService},
    booking::BookingService,
    calendar::CalendarService,
};

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let slot_service = SlotService::new(state.store.clone());
    let slots = slot_service
        .available_slots(query.professional_id, query.date)
        .await;

    Ok(Json(json!({
        "slots": format_slots(&slots)
    })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if request.patient.trim().is_empty() {
        return Err(AppError::BadRequest("patient is required".to_string()));
    }

    let booking_service = BookingService::new(state.store.clone());
    let outcome = booking_service
        .reserve(
            request.professional_id,
            request.date,
            request.time,
            request.patient.trim(),
        )
        .await;

    match outcome {
        ReservationOutcome::Booked => {
            let record = BookingRecord {
                professional_id: request.professional_id,
                date: request.date,
                time: request.time,
                patient: request.patient.trim().to_string(),
            };
            Ok((StatusCode::CREATED, Json(json!(record))))
        }
        ReservationOutcome::SlotTaken => Err(AppError::Conflict(
            "slot no longer available".to_string(),
        )),
        ReservationOutcome::UnknownProfessional => {
            Err(AppError::NotFound("Professional not found".to_string()))
        }
    }
}

#[axum::debug_handler]
pub async fn list_professionals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let professionals: Vec<ProfessionalSummary> = state
        .store
        .list_professionals()
        .await
        .into_iter()
        .map(|professional| ProfessionalSummary {
            id: professional.id,
            name: professional.name,
            role: professional.role,
        })
        .collect();

    Ok(Json(json!({
        "professionals": professionals,
        "total": professionals.len()
    })))
}

#[axum::debug_handler]
pub async fn list_services(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let services = state.store.list_services().await;

    Ok(Json(json!({
        "services": services,
        "total": services.len()
    })))
}

#[axum::debug_handler]
pub async fn apply_availability(
    State(state): State<Arc<AppState>>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<ApplyAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let calendar_service = CalendarService::new(state.store.clone());
    calendar_service
        .apply_window(professional_id, &request.dates, request.window)
        .await?;

    Ok(Json(json!({
        "applied_dates": request.dates.len()
    })))
}

#[axum::debug_handler]
pub async fn apply_recurrence(
    State(state): State<Arc<AppState>>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<ApplyRecurrenceRequest>,
) -> Result<Json<Value>, AppError> {
    let calendar_service = CalendarService::new(state.store.clone());
    let dates = calendar_service
        .apply_recurrence(
            professional_id,
            request.reference_date,
            request.month,
            request.rule,
            request.window,
        )
        .await?;

    Ok(Json(json!({
        "applied_dates": dates
    })))
}
