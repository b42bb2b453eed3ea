use crate::connectors::errors::ConnectorError;
use crate::models::Plan;

use super::PlansConnector;

/// Mock plans service for tests and disabled environments - always succeeds
pub struct MockPlansConnector;

#[async_trait::async_trait]
impl PlansConnector for MockPlansConnector {
    async fn fetch_plans(&self) -> Result<Vec<Plan>, ConnectorError> {
        Ok(vec![
            Plan {
                id: "monthly".to_string(),
                name: "Monthly".to_string(),
                price: 5_000.0,
                original_price: None,
                currency: Some("NGN".to_string()),
                duration_days: Some(30),
                is_popular: false,
                includes_goal_tracker: false,
                includes_accountability_partner: false,
                features: None,
            },
            Plan {
                id: "quarterly".to_string(),
                name: "Quarterly".to_string(),
                price: 13_000.0,
                original_price: Some(20_000.0),
                currency: Some("NGN".to_string()),
                duration_days: Some(90),
                is_popular: true,
                includes_goal_tracker: true,
                includes_accountability_partner: false,
                features: None,
            },
        ])
    }
}
