use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub agent_runtime_url: String,
    pub agent_runtime_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            agent_runtime_url: env::var("AGENT_RUNTIME_URL")
                .unwrap_or_else(|_| {
                    warn!("AGENT_RUNTIME_URL not set, using empty value");
                    String::new()
                }),
            agent_runtime_api_key: env::var("AGENT_RUNTIME_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("AGENT_RUNTIME_API_KEY not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_assistant_configured() {
            warn!("Assistant runtime not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_assistant_configured(&self) -> bool {
        !self.agent_runtime_url.is_empty()
    }
}
