mod common;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLANS_PATH: &str = "/api/subscription-plans";

fn live_plans_body() -> Value {
    json!({
        "success": true,
        "data": [
            {"id": 1, "name": "Monthly", "price": 5000, "duration_days": 30},
            {
                "id": 2,
                "name": "Quarterly",
                "price": 13000,
                "original_price": 20000,
                "duration_days": 90,
                "is_popular": true,
                "includes_goal_tracker": true
            }
        ]
    })
}

/// Boot the service against a mock plans service that answers with `template`
async fn spawn_with_response(template: ResponseTemplate) -> (common::TestApp, MockServer) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PLANS_PATH))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let app = common::spawn_app(mock_server.uri()).await;
    (app, mock_server)
}

async fn get_cards_item(app: &common::TestApp) -> Value {
    let response = reqwest::Client::new()
        .get(&format!("{}/pricing/cards", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("body is not json");
    assert_eq!(body["status"], "OK");
    body["item"].clone()
}

/// The fallback pair: Annual first, Quarterly closest to the anchor and featured
fn assert_fallback_pair(item: &Value) {
    assert_eq!(item["source"], "fallback");

    let cards = item["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 2);

    assert_eq!(cards[0]["name"], "Annual");
    assert_eq!(cards[0]["featured"], false);
    let annual_html = cards[0]["html"].as_str().unwrap();
    assert!(annual_html.contains("35,000"));
    assert!(annual_html.contains("/year"));
    assert!(annual_html.contains("Save 40%"));
    assert!(annual_html.contains(r#"href="https://app.learnhub.ng/subscription""#));

    assert_eq!(cards[1]["name"], "Quarterly");
    assert_eq!(cards[1]["featured"], true);
    let quarterly_html = cards[1]["html"].as_str().unwrap();
    assert!(quarterly_html.contains("Most Popular"));
    assert!(quarterly_html.contains("13,000"));
    assert!(quarterly_html.contains("/3 months"));
    assert!(quarterly_html.contains(r#"href="https://app.learnhub.ng/subscription""#));
}

#[tokio::test]
async fn test_live_plans_render_monthly_and_quarterly() {
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(live_plans_body())).await;

    let item = get_cards_item(&app).await;

    assert_eq!(item["source"], "live");
    assert_eq!(item["insert_after"], "free-plan-card");
    assert_eq!(item["animate_selector"], ".pricing-card.dynamic");

    let cards = item["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 2);

    // Quarterly ranks first, so it is emitted last and ends up beside the anchor
    assert_eq!(cards[0]["name"], "Monthly");
    assert_eq!(cards[0]["featured"], false);
    let monthly_html = cards[0]["html"].as_str().unwrap();
    assert!(monthly_html.contains(r#"<span class="currency">₦</span>"#));
    assert!(monthly_html.contains(r#"<span class="amount">5,000</span>"#));
    assert!(monthly_html.contains(r#"<span class="period">/month</span>"#));
    assert!(!monthly_html.contains("savings"));
    assert!(monthly_html.contains("btn-outline"));
    assert!(monthly_html.contains(r#"href="https://app.learnhub.ng/subscription/payment/1""#));

    assert_eq!(cards[1]["name"], "Quarterly");
    assert_eq!(cards[1]["featured"], true);
    let quarterly_html = cards[1]["html"].as_str().unwrap();
    assert!(quarterly_html.contains("pricing-card dynamic featured"));
    assert!(quarterly_html.contains(r#"<div class="popular-badge">Most Popular</div>"#));
    assert!(quarterly_html.contains(r#"<span class="amount">13,000</span>"#));
    assert!(quarterly_html.contains(r#"<span class="period">/3 months</span>"#));
    assert!(quarterly_html.contains("Save 35%"));
    assert!(quarterly_html.contains("btn-primary"));
    assert!(quarterly_html.contains(r#"href="https://app.learnhub.ng/subscription/payment/2""#));
}

#[tokio::test]
async fn test_unreachable_plans_service_falls_back() {
    // nothing listens on port 1
    let app = common::spawn_app("http://127.0.0.1:1".to_string()).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_success_false_falls_back() {
    let body = json!({
        "success": false,
        "data": [{"id": 1, "name": "Monthly", "price": 5000}]
    });
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(body)).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_empty_plan_list_falls_back() {
    let body = json!({"success": true, "data": []});
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(body)).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_upstream_server_error_falls_back() {
    let (app, _mock_server) = spawn_with_response(ResponseTemplate::new(500)).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_invalid_plan_record_falls_back() {
    let body = json!({
        "success": true,
        "data": [{"id": 1, "name": "", "price": -5}]
    });
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(body)).await;

    let item = get_cards_item(&app).await;

    assert_fallback_pair(&item);
}

#[tokio::test]
async fn test_hostile_plan_name_renders_escaped() {
    let body = json!({
        "success": true,
        "data": [{"id": 9, "name": "<b>Best</b>", "price": 5000}]
    });
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(body)).await;

    let item = get_cards_item(&app).await;

    assert_eq!(item["source"], "live");
    let html = item["cards"][0]["html"].as_str().unwrap();
    assert!(!html.contains("<b>Best</b>"));
    assert!(html.contains("&lt;b&gt;Best"));
}

#[tokio::test]
async fn test_repeated_requests_render_identical_cards() {
    let (app, _mock_server) =
        spawn_with_response(ResponseTemplate::new(200).set_body_json(live_plans_body())).await;

    let first = get_cards_item(&app).await;
    let second = get_cards_item(&app).await;

    assert_eq!(first["cards"], second["cards"]);
}

#[tokio::test]
async fn test_each_render_makes_exactly_one_upstream_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PLANS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_plans_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = common::spawn_app(mock_server.uri()).await;
    let _ = get_cards_item(&app).await;

    // dropped mock server verifies the expectation
}
