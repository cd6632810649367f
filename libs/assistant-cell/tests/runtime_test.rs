use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assistant_cell::models::{RuntimeTurn, ToolInvocation};
use assistant_cell::services::runtime::{AgentRuntime, HttpAgentRuntime};
use shared_config::AppConfig;

fn runtime_config(endpoint: &str, api_key: &str) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        agent_runtime_url: endpoint.to_string(),
        agent_runtime_api_key: api_key.to_string(),
    }
}

fn user_turn(message: &str) -> RuntimeTurn {
    RuntimeTurn {
        conversation_id: "convo-1".to_string(),
        message: Some(message.to_string()),
        tool_results: Vec::new(),
    }
}

#[tokio::test]
async fn posts_the_turn_and_decodes_tool_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "conversation_id": "convo-1",
            "message": "quero marcar uma consulta"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": null,
            "tool_calls": [{
                "id": "call-1",
                "name": "getProfessionalAvailability",
                "args": { "professionalName": "Gisele", "date": "2025-11-20" }
            }]
        })))
        .mount(&mock_server)
        .await;

    let runtime = HttpAgentRuntime::new(&runtime_config(&mock_server.uri(), ""));
    let reply = runtime
        .send_turn(user_turn("quero marcar uma consulta"))
        .await
        .unwrap();

    assert!(reply.text.is_none());
    assert_eq!(reply.tool_calls.len(), 1);
    assert_eq!(reply.tool_calls[0].id, "call-1");
    match &reply.tool_calls[0].invocation {
        ToolInvocation::CheckAvailability(args) => {
            assert_eq!(args.professional_name, "Gisele");
            assert_eq!(args.date.to_string(), "2025-11-20");
        }
        other => panic!("unexpected invocation: {other:?}"),
    }
}

#[tokio::test]
async fn decodes_booking_calls_with_hhmm_times() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tool_calls": [{
                "id": "call-2",
                "name": "bookAppointment",
                "args": {
                    "professionalName": "Juliana",
                    "date": "2025-11-21",
                    "time": "13:00"
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let runtime = HttpAgentRuntime::new(&runtime_config(&mock_server.uri(), ""));
    let reply = runtime.send_turn(user_turn("marca 13h")).await.unwrap();

    match &reply.tool_calls[0].invocation {
        ToolInvocation::BookAppointment(args) => {
            assert_eq!(args.professional_name, "Juliana");
            assert_eq!(args.time.format("%H:%M").to_string(), "13:00");
        }
        other => panic!("unexpected invocation: {other:?}"),
    }
}

#[tokio::test]
async fn sends_the_bearer_token_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "ok",
            "tool_calls": []
        })))
        .mount(&mock_server)
        .await;

    let runtime = HttpAgentRuntime::new(&runtime_config(&mock_server.uri(), "test-key"));
    let reply = runtime.send_turn(user_turn("oi")).await.unwrap();

    assert_eq!(reply.text.as_deref(), Some("ok"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let runtime = HttpAgentRuntime::new(&runtime_config(&mock_server.uri(), ""));
    let result = runtime.send_turn(user_turn("oi")).await;

    assert!(result.is_err());
}
