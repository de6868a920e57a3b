//! Mock bundle server for testing
//!
//! This module provides a mock HTTP server that serves `.properties`
//! bundles. It uses wiremock to create configurable mock responses.

use std::time::Duration;

use bundle_loader::config::{FetchBackend, FetchConfig};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock HTTP server hosting message bundles
pub struct BundleMockServer {
    pub server: MockServer,
}

impl BundleMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Server root without trailing slash
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve `text` at `url_path`
    pub async fn serve_bundle(&self, url_path: &str, text: &str) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/plain; charset=utf-8")
                    .set_body_string(text),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `url_path` with a bare status code
    pub async fn serve_status(&self, url_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve `text` after a delay
    pub async fn serve_slow(&self, url_path: &str, text: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(text).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Fetch configuration pointing the HTTP backend at this server
    pub fn fetch_config(&self, base_path: &str) -> FetchConfig {
        FetchConfig {
            backend: FetchBackend::Http,
            http_base_url: Some(format!("{}{}", self.uri(), base_path)),
            timeout_seconds: 5,
            ..FetchConfig::default()
        }
    }
}
