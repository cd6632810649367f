use std::sync::Arc;

use axum::{routing::post, Router};

use shared_store::AppState;

use crate::handlers;

pub fn assistant_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/agenda-chat", post(handlers::agenda_chat))
        .with_state(state)
}
