use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Subscription plan as served by the plans service.
///
/// Everything beyond `id`, `name` and `price` is optional on the wire and
/// defaulted here, upstream fills fields in gradually as plans get configured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct Plan {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String, // number or string upstream, text everywhere here
    #[validate(min_length = 1)]
    pub name: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
    #[validate(minimum = 0.0)]
    pub original_price: Option<f64>, // pre-discount price, shown as savings
    pub currency: Option<String>, // ISO code, None means the local default
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub includes_goal_tracker: bool,
    #[serde(default)]
    pub includes_accountability_partner: bool,
    pub features: Option<Vec<String>>, // overrides the derived feature list
}

// Plan ids are opaque: they end up urlencoded in checkout links, never parsed
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        serde_json::Value::Number(value) => Ok(value.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "plan id must be a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids_both_deserialize() {
        let numeric: Plan =
            serde_json::from_value(json!({"id": 7, "name": "Monthly", "price": 5000}))
                .unwrap();
        let text: Plan =
            serde_json::from_value(json!({"id": "7", "name": "Monthly", "price": 5000}))
                .unwrap();

        assert_eq!(numeric.id, "7");
        assert_eq!(numeric, text);
    }

    #[test]
    fn boolean_id_is_rejected() {
        let result = serde_json::from_value::<Plan>(json!({
            "id": true, "name": "Monthly", "price": 5000
        }));

        assert!(result.is_err());
    }

    #[test]
    fn missing_flags_default_to_false() {
        let plan: Plan =
            serde_json::from_value(json!({"id": 1, "name": "Monthly", "price": 5000}))
                .unwrap();

        assert!(!plan.is_popular);
        assert!(!plan.includes_goal_tracker);
        assert!(!plan.includes_accountability_partner);
        assert!(plan.features.is_none());
    }

    #[test]
    fn negative_price_fails_validation() {
        let plan: Plan =
            serde_json::from_value(json!({"id": 1, "name": "Monthly", "price": -1.0}))
                .unwrap();

        assert!(plan.validate().is_err());
    }

    #[test]
    fn empty_name_fails_validation() {
        let plan: Plan =
            serde_json::from_value(json!({"id": 1, "name": "", "price": 5000}))
                .unwrap();

        assert!(plan.validate().is_err());
    }
}
