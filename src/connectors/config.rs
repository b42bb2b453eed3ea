use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub plans_service: Option<PlansServiceConfig>,
}

/// Plans service connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansServiceConfig {
    /// Enable/disable the plans service integration
    pub enabled: bool,
    /// Base URL for the plans service API (e.g., https://api.learnhub.ng)
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PlansServiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:8100".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            plans_service: Some(PlansServiceConfig::default()),
        }
    }
}
