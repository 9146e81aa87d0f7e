//! End-to-end lookup flows against a wiremock Open-Meteo.

use std::sync::{mpsc, Arc};

use async_trait::async_trait;
use skycast_ui::presenter::{FETCHING_WEATHER, FINDING_CITY, GETTING_LOCATION};
use skycast_ui::view::PLACEHOLDER;
use skycast_ui::{
    request_lookup, LookupRequest, Severity, ViewModel, WeatherModel, WeatherService,
    WeatherServiceMessage,
};
use skycast_weather::{
    Coordinates, DeviceLocator, FixedLocator, Geocoder, LocationError, WeatherProvider,
};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct DenyingLocator;

#[async_trait]
impl DeviceLocator for DenyingLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

fn service(server: &MockServer, locator: Arc<dyn DeviceLocator>) -> WeatherService {
    let client = reqwest::Client::new();
    WeatherService::new(
        Geocoder::new(client.clone(), format!("{}/v1/search", server.uri())),
        WeatherProvider::new(client, format!("{}/v1/forecast", server.uri())),
        locator,
    )
}

fn berlin() -> serde_json::Value {
    serde_json::json!({
        "results": [
            { "name": "Berlin", "latitude": 52.52, "longitude": 13.41, "country": "Germany" }
        ]
    })
}

fn forecast() -> serde_json::Value {
    serde_json::json!({
        "timezone": "Europe/Berlin",
        "current_weather": { "temperature": 20.6, "weathercode": 0 },
        "daily": {
            "time": ["2024-01-01", "2024-01-02"],
            "weathercode": [0, 61],
            "temperature_2m_max": [10.4, 5.6],
            "temperature_2m_min": [2.1, -1.2],
            "uv_index_max": [2.35, 1.1]
        }
    })
}

async fn mount_geocode(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

async fn run(service: &WeatherService, request: LookupRequest) -> (Vec<ViewModel>, ViewModel) {
    let mut progress = Vec::new();
    let view = service.lookup(request, |v| progress.push(v)).await;
    (progress, view)
}

#[tokio::test]
async fn test_city_lookup_renders_panel() {
    let server = MockServer::start().await;
    mount_geocode(&server, berlin()).await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.52"))
        .and(query_param("longitude", "13.41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast()))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (progress, view) = run(&service, LookupRequest::City("Berlin".into())).await;

    assert_eq!(
        progress,
        vec![ViewModel::busy(FINDING_CITY), ViewModel::busy(FETCHING_WEATHER)]
    );
    assert!(view.status().is_none());

    let panel = view.panel().unwrap();
    assert_eq!(panel.current.location_name, "Berlin, Germany");
    assert_eq!(panel.current.temperature, "21");
    assert_eq!(panel.current.humidity, PLACEHOLDER);
    assert_eq!(panel.current.wind_speed, PLACEHOLDER);
    assert_eq!(panel.current.pressure, PLACEHOLDER);
    assert_eq!(panel.current.uv_index, "2.35");

    assert_eq!(panel.forecast.len(), 2);
    assert_eq!(panel.forecast[0].description, "Clear sky");
    assert_eq!(panel.forecast[0].temperature_range, "10° / 2°");
    assert_eq!(panel.forecast[1].description, "Slight rain");
    assert_eq!(panel.forecast[1].temperature_range, "6° / -1°");
}

#[tokio::test]
async fn test_blank_city_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (progress, view) = run(&service, LookupRequest::City(" \t ".into())).await;

    assert!(progress.is_empty());
    let status = view.status().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, "Please enter a city name.");
    assert!(view.panel().is_none());
}

#[tokio::test]
async fn test_unknown_city_skips_forecast() {
    let server = MockServer::start().await;
    mount_geocode(&server, serde_json::json!({ "results": [] })).await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast()), 0).await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (_, view) = run(&service, LookupRequest::City("Atlantis".into())).await;

    assert_eq!(
        view.status().unwrap().text,
        "City not found. Please try a different name."
    );
    assert!(view.panel().is_none());
}

#[tokio::test]
async fn test_forecast_failure_hides_panel() {
    let server = MockServer::start().await;
    mount_geocode(&server, berlin()).await;
    mount_forecast(&server, ResponseTemplate::new(500), 1).await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (_, view) = run(&service, LookupRequest::City("Berlin".into())).await;

    let status = view.status().unwrap();
    assert!(status.is_error());
    assert_eq!(
        status.text,
        "Failed to fetch weather data. Please try again later."
    );
    assert!(view.panel().is_none());
}

#[tokio::test]
async fn test_denied_location_skips_forecast() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast()), 0).await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (progress, view) = run(&service, LookupRequest::DeviceLocation).await;

    assert_eq!(progress, vec![ViewModel::busy(GETTING_LOCATION)]);
    assert!(view
        .status()
        .unwrap()
        .text
        .starts_with("Unable to retrieve your location."));
    assert!(view.panel().is_none());
}

#[tokio::test]
async fn test_device_location_uses_sentinel_label() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast()), 1).await;

    let locator = Arc::new(FixedLocator(Coordinates::new(52.52, 13.41)));
    let service = service(&server, locator);
    let (_, view) = run(&service, LookupRequest::DeviceLocation).await;

    assert_eq!(view.panel().unwrap().current.location_name, "Your Location");
}

#[tokio::test]
async fn test_raw_coordinates_fall_back_to_timezone_label() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast()), 1).await;

    let service = service(&server, Arc::new(DenyingLocator));
    let (progress, view) = run(
        &service,
        LookupRequest::Coordinates(Coordinates::new(52.52, 13.41)),
    )
    .await;

    assert_eq!(progress, vec![ViewModel::busy(FETCHING_WEATHER)]);
    assert_eq!(view.panel().unwrap().current.location_name, "Berlin");
}

#[test]
fn test_request_lookup_reports_through_channel() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast()), 2).await;
        server
    });
    let service = Arc::new(service(&server, Arc::new(DenyingLocator)));

    let (tx, rx) = mpsc::channel();
    let mut model = WeatherModel::new();
    let stale = model.begin_lookup();
    let current = model.begin_lookup();
    let at = LookupRequest::Coordinates(Coordinates::new(52.52, 13.41));
    request_lookup(runtime.handle(), &tx, service.clone(), stale, at.clone());
    request_lookup(runtime.handle(), &tx, service, current, at);
    drop(tx);

    let mut applied_done = 0;
    for message in rx {
        let token = message.token();
        let done = matches!(message, WeatherServiceMessage::Done { .. });
        let applied = model.handle(message);
        assert_eq!(applied, token == current);
        if applied && done {
            applied_done += 1;
        }
    }

    assert_eq!(applied_done, 1);
    assert!(model.view().panel().is_some());
    assert!(model.view().status().is_none());

    runtime.block_on(server.verify());
}
