use crate::client::A2aClient;
use crate::config::A2aConfig;
use skillbridge_core::BridgeResult;
use skillbridge_skills::SkillCatalog;
use tracing::info;

/// Fetch the agent card at `{base_url}/.well-known/agent.json` and snapshot its skills.
pub async fn fetch_catalog(base_url: &str) -> BridgeResult<SkillCatalog> {
    A2aClient::new(A2aConfig::new(base_url)).fetch_catalog().await
}

impl A2aClient {
    /// Fetch the agent card and snapshot its skills. No retry.
    pub async fn fetch_catalog(&self) -> BridgeResult<SkillCatalog> {
        info!(url = %self.config().agent_card_url(), "Fetching agent card");
        let skills = self.fetch_agent_card().await?.into_skills();
        info!(count = skills.len(), "Discovered remote skills");
        Ok(SkillCatalog::new(skills))
    }
}
