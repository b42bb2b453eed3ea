mod client;
mod connector;
mod init;
pub mod mock;
mod types;


pub use client::PlansServiceClient;
pub use connector::PlansConnector;
pub use init::init;
pub use mock::MockPlansConnector;
pub use types::PlansEnvelope;
