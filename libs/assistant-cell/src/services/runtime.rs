use anyhow::{anyhow, Result};
use async_trait::async_trait;

use shared_config::AppConfig;

use crate::models::{RuntimeReply, RuntimeTurn};

/// Boundary to the natural-language agent runtime. The runtime decides
/// when to call tools; this crate only executes them and feeds results
/// back.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn send_turn(&self, turn: RuntimeTurn) -> Result<RuntimeReply>;
}

/// Production runtime reached over HTTP.
pub struct HttpAgentRuntime {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpAgentRuntime {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.agent_runtime_url.clone(),
            api_key: config.agent_runtime_api_key.clone(),
        }
    }
}

#[async_trait]
impl AgentRuntime for HttpAgentRuntime {
    async fn send_turn(&self, turn: RuntimeTurn) -> Result<RuntimeReply> {
        let mut request = self.client.post(&self.endpoint).json(&turn);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "Agent runtime returned status {}",
                response.status()
            ));
        }

        Ok(response.json().await?)
    }
}
