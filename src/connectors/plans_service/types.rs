use crate::models::Plan;
use serde::{Deserialize, Serialize};

/// Response envelope of GET /api/subscription-plans
///
/// A missing `success` or `data` key counts as an unsuccessful reply, not a
/// parse error, so both fields default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Plan>,
}
