use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::professional::hhmm;

/// One user turn of the agenda chat. Patient identity travels with the
/// surrounding conversation, not with the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaChatRequest {
    pub conversation_id: String,
    pub message: String,
    pub patient_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaChatResponse {
    pub response_text: String,
    pub appointment_booked: bool,
}

/// Request sent to the agent runtime. The first round carries the user
/// message; follow-up rounds carry tool results instead. Conversation
/// state lives in the runtime, keyed by `conversation_id`.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeTurn {
    pub conversation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_results: Vec<ToolResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeReply {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(flatten)]
    pub invocation: ToolInvocation,
}

/// The two tools the runtime may invoke, wire names per the external
/// contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "name", content = "args")]
pub enum ToolInvocation {
    #[serde(rename = "getProfessionalAvailability")]
    CheckAvailability(AvailabilityArgs),
    #[serde(rename = "bookAppointment")]
    BookAppointment(BookingArgs),
}

impl ToolInvocation {
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolInvocation::CheckAvailability(_) => "getProfessionalAvailability",
            ToolInvocation::BookAppointment(_) => "bookAppointment",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityArgs {
    pub professional_name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingArgs {
    pub professional_name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub id: String,
    pub name: String,
    pub result: Value,
}
