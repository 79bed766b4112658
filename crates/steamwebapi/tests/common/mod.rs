//! Common test utilities and helpers

use std::path::Path;
use std::sync::Arc;

use steamwebapi::Client;
use steamwebapi_core::sleep::RecordingSleeper;
use wiremock::ResponseTemplate;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// A JSON response template for a fixture
#[allow(dead_code)]
pub fn json_fixture(status: u16, name: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(load_response_fixture(name), "application/json")
}

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "swa-test-key-0123456789abcdef".to_string()
}

/// A client pointed at a mock server whose retry waits are recorded, not slept
#[allow(dead_code)]
pub fn mock_client(base_url: &str) -> (Client, RecordingSleeper) {
    let sleeper = RecordingSleeper::new();
    let client = Client::builder()
        .api_key(test_api_key())
        .base_url(base_url)
        .sleeper(Arc::new(sleeper.clone()))
        .build()
        .expect("Failed to build client");
    (client, sleeper)
}
