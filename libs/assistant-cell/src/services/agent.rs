use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::{debug, warn};

use scheduling_cell::models::ReservationOutcome;
use scheduling_cell::services::availability::{format_slots, SlotService};
use scheduling_cell::services::booking::BookingService;
use shared_store::ProfessionalStore;

use crate::models::{
    AgendaChatRequest, AgendaChatResponse, AvailabilityArgs, BookingArgs, RuntimeTurn, ToolCall,
    ToolInvocation, ToolResult,
};
use crate::services::runtime::AgentRuntime;

/// Backstop against a runtime that keeps requesting tools forever.
const MAX_TOOL_ROUNDS: usize = 8;

/// Conversational booking orchestrator: forwards the user turn to the
/// agent runtime, executes whatever tools it requests (zero, one, or
/// many per round), and loops until the runtime answers in plain text.
pub struct AgendaAssistantService {
    runtime: Arc<dyn AgentRuntime>,
    store: ProfessionalStore,
    slot_service: SlotService,
    booking_service: BookingService,
}

impl AgendaAssistantService {
    pub fn new(store: ProfessionalStore, runtime: Arc<dyn AgentRuntime>) -> Self {
        Self {
            runtime,
            slot_service: SlotService::new(store.clone()),
            booking_service: BookingService::new(store.clone()),
            store,
        }
    }

    pub async fn respond(&self, request: AgendaChatRequest) -> Result<AgendaChatResponse> {
        let mut reply = self
            .runtime
            .send_turn(RuntimeTurn {
                conversation_id: request.conversation_id.clone(),
                message: Some(request.message.clone()),
                tool_results: Vec::new(),
            })
            .await?;

        let mut appointment_booked = false;
        let mut rounds = 0;

        while !reply.tool_calls.is_empty() {
            rounds += 1;
            if rounds > MAX_TOOL_ROUNDS {
                warn!(
                    "Conversation {} exceeded {} tool rounds, stopping",
                    request.conversation_id, MAX_TOOL_ROUNDS
                );
                break;
            }

            let mut tool_results = Vec::with_capacity(reply.tool_calls.len());
            for call in reply.tool_calls {
                tool_results.push(self.execute_tool(call, &request.patient_name, &mut appointment_booked).await);
            }

            reply = self
                .runtime
                .send_turn(RuntimeTurn {
                    conversation_id: request.conversation_id.clone(),
                    message: None,
                    tool_results,
                })
                .await?;
        }

        Ok(AgendaChatResponse {
            response_text: reply.text.unwrap_or_default(),
            appointment_booked,
        })
    }

    async fn execute_tool(
        &self,
        call: ToolCall,
        patient_name: &str,
        appointment_booked: &mut bool,
    ) -> ToolResult {
        let name = call.invocation.tool_name();
        debug!("Executing tool {} for call {}", name, call.id);

        let result = match call.invocation {
            ToolInvocation::CheckAvailability(args) => self.check_availability(&args).await,
            ToolInvocation::BookAppointment(args) => {
                let booked = self.book_appointment(&args, patient_name).await;
                if booked {
                    *appointment_booked = true;
                }
                // A `false` goes back to the model verbatim so it can
                // re-offer availability instead of failing the turn.
                json!(booked)
            }
        };

        ToolResult {
            id: call.id,
            name: name.to_string(),
            result,
        }
    }

    async fn check_availability(&self, args: &AvailabilityArgs) -> Value {
        match self
            .store
            .find_professional_by_name(&args.professional_name)
            .await
        {
            Some(professional) => {
                let slots = self
                    .slot_service
                    .available_slots(professional.id, args.date)
                    .await;
                json!(format_slots(&slots))
            }
            None => json!([]),
        }
    }

    async fn book_appointment(&self, args: &BookingArgs, patient_name: &str) -> bool {
        let Some(professional) = self
            .store
            .find_professional_by_name(&args.professional_name)
            .await
        else {
            return false;
        };

        matches!(
            self.booking_service
                .reserve(professional.id, args.date, args.time, patient_name)
                .await,
            ReservationOutcome::Booked
        )
    }
}
