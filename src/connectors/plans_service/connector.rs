use crate::connectors::errors::ConnectorError;
use crate::models::Plan;

/// Trait for the plans service integration
/// Allows mocking in tests and swapping implementations
#[async_trait::async_trait]
pub trait PlansConnector: Send + Sync {
    /// Fetch the purchasable subscription plans shown on the landing page
    /// Calls GET /api/subscription-plans; any reply without usable plans is an error
    async fn fetch_plans(&self) -> Result<Vec<Plan>, ConnectorError>;
}
