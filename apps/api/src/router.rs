use std::sync::Arc;

use axum::{routing::get, Router};

use assistant_cell::router::assistant_routes;
use scheduling_cell::router::scheduling_routes;
use shared_store::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Equilibrium Clinic API is running!" }))
        .merge(scheduling_routes(state.clone()))
        .nest("/assistant", assistant_routes(state))
}
