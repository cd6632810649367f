use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_store::AppState;

use crate::handlers;

pub fn scheduling_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/availability", get(handlers::get_available_slots))
        .route("/appointments", post(handlers::book_appointment))
        .route("/professionals", get(handlers::list_professionals))
        .route("/services", get(handlers::list_services))
        .route(
            "/professionals/{professional_id}/availability",
            put(handlers::apply_availability),
        )
        .route(
            "/professionals/{professional_id}/availability/recurrence",
            post(handlers::apply_recurrence),
        )
        .with_state(state)
}
