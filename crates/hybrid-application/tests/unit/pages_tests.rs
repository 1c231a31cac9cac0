//! Page Tests

use async_trait::async_trait;
use hybrid_application::components::pages::{Counter, Home, Weather, WeatherForecast};
use hybrid_application::components::{Component, Page, RenderTree, UiAction};
use hybrid_application::register_client_services;
use hybrid_domain::constants::{ALERT_MESSAGE, SHOW_ALERT_FUNCTION, WEATHER_DATA_PATH};
use hybrid_domain::error::{Error, Result};
use hybrid_domain::ports::{FirstService, HostInterop, HttpClient};
use hybrid_domain::value_objects::RouteParams;
use hybrid_infrastructure::adapters::{HeadlessHostInterop, InteropCall};
use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection, ServiceProvider};
use serde_json::{Value, json};
use std::sync::Arc;

struct StubHttp {
    body: Option<Value>,
}

#[async_trait]
impl HttpClient for StubHttp {
    fn base_address(&self) -> &str {
        "http://localhost/"
    }

    async fn get_json(&self, relative: &str) -> Result<Value> {
        assert_eq!(relative, WEATHER_DATA_PATH);
        self.body
            .clone()
            .ok_or_else(|| Error::http("connection refused"))
    }
}

fn provider(interop: Arc<dyn HostInterop>) -> ServiceProvider {
    let mut services = ServiceCollection::new();
    register_client_services(&mut services).unwrap();
    services.add_instance::<dyn HostInterop>(interop).unwrap();
    services.build(ProviderOptions::default()).unwrap()
}

#[tokio::test]
async fn test_home_alert_calls_the_host_function() {
    let interop = Arc::new(HeadlessHostInterop::new([SHOW_ALERT_FUNCTION]));
    let provider = provider(interop.clone());
    let home = Home::activate(&provider.create_scope(), &RouteParams::new()).unwrap();

    let handled = home
        .handle_event(&UiAction::new("trigger-alert"))
        .await
        .unwrap();

    assert!(handled);
    assert_eq!(
        interop.calls(),
        vec![InteropCall {
            function: SHOW_ALERT_FUNCTION.to_string(),
            args: vec![json!(ALERT_MESSAGE)],
        }]
    );
    assert_eq!(home.status().as_deref(), Some("Alert shown"));
}

#[tokio::test]
async fn test_home_survives_an_interop_failure() {
    let interop = Arc::new(HeadlessHostInterop::new(Vec::<String>::new()));
    let provider = provider(interop);
    let home = Home::activate(&provider.create_scope(), &RouteParams::new()).unwrap();

    let handled = home
        .handle_event(&UiAction::new("trigger-alert"))
        .await
        .unwrap();
    let mut tree = RenderTree::new();
    home.render(&mut tree).await.unwrap();

    assert!(handled);
    assert!(home.status().unwrap().starts_with("Alert failed"));
    assert!(tree.to_html().contains("role=\"status\""));
}

#[tokio::test]
async fn test_home_renders_its_injected_services() {
    let provider = provider(Arc::new(HeadlessHostInterop::new([SHOW_ALERT_FUNCTION])));
    let first = provider.resolve::<dyn FirstService>().unwrap();
    let home = Home::new(first, provider.resolve::<dyn HostInterop>().unwrap());

    let mut tree = RenderTree::new();
    home.render(&mut tree).await.unwrap();

    let text = tree.text_content();
    assert!(text.contains("Hello, world!"));
    assert!(text.contains("MyFirstService is wired with MySecondService"));
    assert!(!home.handle_event(&UiAction::new("increment")).await.unwrap());
}

#[tokio::test]
async fn test_counter_increments() {
    let counter = Counter::new(0);
    assert!(counter.handle_event(&UiAction::new("increment")).await.unwrap());
    assert!(counter.handle_event(&UiAction::new("increment")).await.unwrap());
    assert!(!counter.handle_event(&UiAction::new("trigger-alert")).await.unwrap());

    let mut tree = RenderTree::new();
    counter.render(&mut tree).await.unwrap();
    assert!(tree.text_content().contains("Current count: 2"));
}

#[test]
fn test_counter_start_parameter_falls_back_to_zero() {
    let provider = ServiceCollection::new()
        .build(ProviderOptions::default())
        .unwrap();
    let scope = provider.create_scope();

    let numeric: RouteParams = [("start", "7")].into_iter().collect();
    let garbage: RouteParams = [("start", "seven")].into_iter().collect();

    assert_eq!(Counter::activate(&scope, &numeric).unwrap().count(), 7);
    assert_eq!(Counter::activate(&scope, &garbage).unwrap().count(), 0);
    assert_eq!(Counter::activate(&scope, &RouteParams::new()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_weather_lists_forecasts() {
    let weather = Weather::new(Arc::new(StubHttp {
        body: Some(json!([
            { "date": "2022-01-06", "temperatureC": 1, "summary": "Freezing" },
            { "date": "2022-01-07", "temperatureC": 14, "summary": "Bracing" }
        ])),
    }));

    let mut tree = RenderTree::new();
    weather.render(&mut tree).await.unwrap();

    let html = tree.to_html();
    assert!(html.contains("<td>2022-01-06</td><td>1</td><td>33</td><td>Freezing</td>"));
    assert!(html.contains("<td>Bracing</td>"));
}

#[tokio::test]
async fn test_weather_degrades_when_the_request_fails() {
    let weather = Weather::new(Arc::new(StubHttp { body: None }));

    let mut tree = RenderTree::new();
    weather.render(&mut tree).await.unwrap();

    assert!(tree.text_content().contains("Unable to load the forecast."));
}

#[tokio::test]
async fn test_weather_degrades_on_a_malformed_payload() {
    let weather = Weather::new(Arc::new(StubHttp {
        body: Some(json!({ "error": "maintenance" })),
    }));

    let mut tree = RenderTree::new();
    weather.render(&mut tree).await.unwrap();

    let text = tree.text_content();
    assert!(text.contains("Weather"));
    assert!(text.contains("Unable to load the forecast."));
    assert!(!tree.to_html().contains("<table"));
}

#[test]
fn test_fahrenheit_conversion() {
    let forecast = WeatherForecast {
        date: "2022-01-08".to_string(),
        temperature_c: -13,
        summary: None,
    };
    assert_eq!(forecast.temperature_f(), 9);
}
