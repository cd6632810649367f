use std::sync::Arc;

use axum::{extract::State, Json};

use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::{AgendaChatRequest, AgendaChatResponse};
use crate::services::agent::AgendaAssistantService;
use crate::services::runtime::HttpAgentRuntime;

#[axum::debug_handler]
pub async fn agenda_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgendaChatRequest>,
) -> Result<Json<AgendaChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("message is required".to_string()));
    }
    if request.patient_name.trim().is_empty() {
        return Err(AppError::BadRequest("patientName is required".to_string()));
    }
    if !state.config.is_assistant_configured() {
        return Err(AppError::ExternalService(
            "agent runtime is not configured".to_string(),
        ));
    }

    let runtime = Arc::new(HttpAgentRuntime::new(&state.config));
    let service = AgendaAssistantService::new(state.store.clone(), runtime);

    let response = service
        .respond(request)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(response))
}
