use pricer::configuration::{PaymentSettings, Settings};
use pricer::connectors::{ConnectorConfig, PlansServiceConfig};

pub struct TestApp {
    pub address: String,
}

// we have to run the server in another thread
pub async fn spawn_app(plans_base_url: String) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        payment: PaymentSettings {
            base_url: "https://app.learnhub.ng".to_string(),
        },
        connectors: ConnectorConfig {
            plans_service: Some(PlansServiceConfig {
                enabled: true,
                base_url: plans_base_url,
                timeout_secs: 5,
            }),
        },
    };

    let server = pricer::startup::run(listener, settings)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp { address }
}
