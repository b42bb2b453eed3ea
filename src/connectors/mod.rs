//! External Service Connectors
//!
//! This module provides adapters for communicating with external services (Plans Service, etc.).
//! All external integrations must go through connectors to keep the pricing service independent
//! and testable.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `connector.rs` → allows mocking in tests
//! 2. Implement HTTP client in `client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject trait object into routes → routes never depend on HTTP implementation
//!
//! ## Usage in Routes
//!
//! ```ignore
//! // In route handler
//! pub async fn cards_handler(
//!     connector: web::Data<Arc<dyn PlansConnector>>,
//! ) -> Result<impl Responder> {
//!     // Routes use trait methods, never care about HTTP details
//!     connector.fetch_plans().await?;
//! }
//! ```

pub mod config;
pub mod errors;
pub mod plans_service;

pub use config::{ConnectorConfig, PlansServiceConfig};
pub use errors::ConnectorError;
pub use plans_service::{MockPlansConnector, PlansConnector, PlansEnvelope, PlansServiceClient};

// Re-export init functions for convenient access
pub use plans_service::init as init_plans_service;
