use actix_web::web;
use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;
use crate::connectors::plans_service::{mock, PlansConnector, PlansServiceClient};

/// Initialize the plans service connector with config from Settings
///
/// Returns the configured connector wrapped in web::Data for injection into the Actix app
///
/// # Example
/// ```ignore
/// // In startup.rs
/// let plans_service = connectors::init_plans_service(&settings.connectors);
/// App::new().app_data(plans_service)
/// ```
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn PlansConnector>> {
    let connector: Arc<dyn PlansConnector> = if let Some(config) = connector_config
        .plans_service
        .as_ref()
        .filter(|c| c.enabled)
    {
        tracing::info!("Initializing plans service connector: {}", config.base_url);
        Arc::new(PlansServiceClient::new(config.clone()))
    } else {
        tracing::warn!("Plans service connector disabled - using mock");
        Arc::new(mock::MockPlansConnector)
    };

    web::Data::new(connector)
}
