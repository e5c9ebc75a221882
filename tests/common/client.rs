//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all mood-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 5;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /health
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("Health request failed")
    }

    // ========================================================================
    // Mood Endpoints
    // ========================================================================

    /// POST /v1/mood/text
    pub async fn analyze_text(&self, text: &str) -> Response {
        self.post_json("/v1/mood/text", json!({ "text": text })).await
    }

    /// POST /v1/mood/text with an explicit confidence threshold
    pub async fn analyze_text_with_threshold(&self, text: &str, threshold: f64) -> Response {
        self.post_json(
            "/v1/mood/text",
            json!({ "text": text, "confidence_threshold": threshold }),
        )
        .await
    }

    /// POST /v1/mood/audio
    pub async fn analyze_audio(&self, audio_features: Value) -> Response {
        self.post_json("/v1/mood/audio", json!({ "audio_features": audio_features }))
            .await
    }

    // ========================================================================
    // Recommendation Endpoints
    // ========================================================================

    /// POST /v1/recommend
    pub async fn recommend(&self, mood_emotions: Value, limit: Option<usize>) -> Response {
        let mut body = json!({ "mood_emotions": mood_emotions });
        if let Some(limit) = limit {
            body["limit"] = json!(limit);
        }
        self.post_json("/v1/recommend", body).await
    }

    // ========================================================================
    // Admin Endpoints
    // ========================================================================

    /// POST /v1/admin/catalog/reload
    pub async fn reload_catalog(&self) -> Response {
        self.client
            .post(format!("{}/v1/admin/catalog/reload", self.base_url))
            .send()
            .await
            .expect("Reload request failed")
    }

    async fn post_json(&self, route: &str, body: Value) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, route))
            .json(&body)
            .send()
            .await
            .expect("Request failed")
    }
}
