pub mod health_checks;
pub(crate) mod pricing;

pub use health_checks::*;
