use crate::connectors::config::PlansServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::Plan;

use serde_valid::Validate;
use tracing::Instrument;

use super::connector::PlansConnector;
use super::types::PlansEnvelope;

/// HTTP-based plans service client
pub struct PlansServiceClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl PlansServiceClient {
    /// Create new plans service client
    pub fn new(config: PlansServiceConfig) -> Self {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url,
            http_client,
        }
    }
}

#[async_trait::async_trait]
impl PlansConnector for PlansServiceClient {
    async fn fetch_plans(&self) -> Result<Vec<Plan>, ConnectorError> {
        let span = tracing::info_span!("plans_service_fetch_plans");

        // Single attempt: a slow upstream must not hold the landing page,
        // callers fall back instead
        let url = format!("{}/api/subscription-plans", self.base_url);
        let resp = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .instrument(span)
            .await
            .map_err(|e| {
                tracing::error!("fetch_plans error: {:?}", e);
                ConnectorError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ConnectorError::HttpError(format!(
                "Plans request failed with status {}",
                status
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;
        let envelope = serde_json::from_str::<PlansEnvelope>(&text)
            .map_err(|_| ConnectorError::InvalidResponse(text))?;

        if !envelope.success {
            return Err(ConnectorError::Unsuccessful(
                "plans service reported success=false".to_string(),
            ));
        }
        if envelope.data.is_empty() {
            return Err(ConnectorError::Unsuccessful(
                "plans service returned an empty plan list".to_string(),
            ));
        }

        for plan in &envelope.data {
            plan.validate().map_err(|e| {
                ConnectorError::InvalidResponse(format!("plan {}: {}", plan.id, e))
            })?;
        }

        tracing::debug!("Fetched {} subscription plans", envelope.data.len());
        Ok(envelope.data)
    }
}
