use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub payment: PaymentSettings,
    pub connectors: ConnectorConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PaymentSettings {
    pub base_url: String,
}

impl PaymentSettings {
    // Checkout link: <base_url>/subscription/payment/<plan_id>
    pub fn plan_checkout_url(&self, plan_id: &str) -> String {
        format!(
            "{}/subscription/payment/{}",
            self.base_url,
            urlencoding::encode(plan_id),
        )
    }

    // Generic subscription page, used when no concrete plan id is available
    pub fn subscription_url(&self) -> String {
        format!("{}/subscription", self.base_url)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // Environment wins over the file for the payment host
    if let Ok(base_url) = std::env::var("PAYMENT_BASE_URL") {
        config.payment.base_url = base_url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> PaymentSettings {
        PaymentSettings {
            base_url: "https://app.learnhub.ng".to_string(),
        }
    }

    #[test]
    fn checkout_url_embeds_plan_id() {
        assert_eq!(
            payment().plan_checkout_url("42"),
            "https://app.learnhub.ng/subscription/payment/42"
        );
    }

    #[test]
    fn checkout_url_escapes_plan_id() {
        assert_eq!(
            payment().plan_checkout_url("pro/annual 2026"),
            "https://app.learnhub.ng/subscription/payment/pro%2Fannual%202026"
        );
    }

    #[test]
    fn subscription_url_has_no_plan_segment() {
        assert_eq!(
            payment().subscription_url(),
            "https://app.learnhub.ng/subscription"
        );
    }
}
