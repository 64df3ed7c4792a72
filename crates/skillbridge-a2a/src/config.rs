use std::time::Duration;

/// Default A2A server when `A2A_SERVER_URL` is not set.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default per-request timeout for task dispatch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the A2A server lives and how long a task may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A2aConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl A2aConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn agent_card_url(&self) -> String {
        format!("{}/.well-known/agent.json", self.base_url)
    }

    pub fn tasks_send_url(&self) -> String {
        format!("{}/a2a/tasks/send", self.base_url)
    }
}

impl Default for A2aConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = A2aConfig::default();
        assert_eq!(config.agent_card_url(), "http://localhost:3000/.well-known/agent.json");
        assert_eq!(config.tasks_send_url(), "http://localhost:3000/a2a/tasks/send");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = A2aConfig::new("http://maps.internal:8080/").with_timeout(Duration::from_secs(5));
        assert_eq!(config.tasks_send_url(), "http://maps.internal:8080/a2a/tasks/send");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
