// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use sougi_core::application::ports::{
    cache::CacheStore, generator::TextGenerator, places::PlacesClient, romanizer::Romanizer,
};
use sougi_core::application::services::{ApplicationServices, ServiceSettings};
use sougi_core::domain::region::RegionCatalog;
use sougi_core::infrastructure::cache::InMemoryCacheStore;
use sougi_core::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};

pub const ADMIN_KEY: &str = "test-admin-key";

/// Ports wired into `ApplicationServices` for a test.
pub struct TestPorts {
    pub store: Arc<dyn CacheStore>,
    pub places: Arc<dyn PlacesClient>,
    pub generator: Arc<dyn TextGenerator>,
    pub romanizer: Option<Arc<dyn Romanizer>>,
}

impl Default for TestPorts {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryCacheStore::new()),
            places: Arc::new(mocks::StubPlaces::new(super::builders::sample_places())),
            generator: Arc::new(mocks::ScriptedGenerator::new(vec![])),
            romanizer: None,
        }
    }
}

pub fn build_services(ports: TestPorts) -> Arc<ApplicationServices> {
    let regions = Arc::new(RegionCatalog::builtin().expect("builtin regions"));
    Arc::new(ApplicationServices::new(
        ports.store,
        ports.places,
        ports.generator,
        ports.romanizer,
        regions,
        Arc::new(mocks::FixedClock::default()),
        Arc::new(mocks::FixedToken),
        ServiceSettings::default(),
    ))
}

pub fn make_test_router_with(ports: TestPorts, admin_key: Option<&str>) -> axum::Router {
    let state = HttpState::new(build_services(ports), admin_key);
    build_router_with_rate_limiter(state, false)
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(TestPorts::default(), Some(ADMIN_KEY))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_as_admin(uri: &str, body: &Value, key: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-admin-key", key)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
