//! HTTP client for an A2A server.

use crate::config::A2aConfig;
use crate::protocol::{error_body_message, AgentCard, TaskEnvelope, TaskResult};
use skillbridge_core::{BridgeError, BridgeResult};
use tracing::debug;

/// Talks to one A2A server. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct A2aClient {
    http: reqwest::Client,
    config: A2aConfig,
}

impl A2aClient {
    pub fn new(config: A2aConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Reuse an existing connection pool.
    pub fn with_http(config: A2aConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &A2aConfig {
        &self.config
    }

    /// GET the agent card. Any failure is a [`BridgeError::Discovery`].
    pub async fn fetch_agent_card(&self) -> BridgeResult<AgentCard> {
        let url = self.config.agent_card_url();
        debug!(url = %url, "Fetching agent card");

        let resp = self
            .http
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| BridgeError::Discovery(format!("GET {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BridgeError::Discovery(format!(
                "HTTP error {} fetching agent card",
                status.as_u16()
            )));
        }

        resp.json::<AgentCard>()
            .await
            .map_err(|e| BridgeError::Discovery(format!("invalid agent card: {e}")))
    }

    /// POST a task envelope and parse the server's answer.
    ///
    /// Errors are either [`BridgeError::DispatchTransport`] (network, timeout,
    /// unreadable body) or [`BridgeError::RemoteTaskFailure`] (non-2xx with a
    /// JSON body, whose `error.message` or raw text becomes the message).
    pub async fn send_task(&self, envelope: &TaskEnvelope) -> BridgeResult<TaskResult> {
        let resp = self
            .http
            .post(self.config.tasks_send_url())
            .timeout(self.config.timeout)
            .json(envelope)
            .send()
            .await
            .map_err(|e| BridgeError::DispatchTransport(describe_transport_error(&e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| BridgeError::DispatchTransport(describe_transport_error(&e)))?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(json) => BridgeError::RemoteTaskFailure(
                    error_body_message(&json)
                        .map(str::to_string)
                        .unwrap_or(body),
                ),
                Err(_) => BridgeError::DispatchTransport(format!("HTTP error {}", status.as_u16())),
            });
        }

        serde_json::from_str::<TaskResult>(&body)
            .map_err(|e| BridgeError::DispatchTransport(format!("invalid task response: {e}")))
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    }
}
