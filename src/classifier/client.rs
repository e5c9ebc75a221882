//! HTTP client for the external text classification service.

use super::MoodClassifier;
use crate::mood::{EmotionDistribution, SentimentDistribution};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct ClassifyBody<'a> {
    text: &'a str,
}

/// HTTP client for the classifier service hosting the emotion and
/// sentiment models.
pub struct ClassifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a new classifier client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the classifier service (e.g., "http://localhost:8600")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_text<T: serde::de::DeserializeOwned>(&self, route: &str, text: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, route);
        let response = self
            .client
            .post(&url)
            .json(&ClassifyBody { text })
            .send()
            .await
            .with_context(|| format!("Failed to reach classifier at {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Classifier call {} failed with status: {}",
                route,
                response.status()
            );
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse classifier {} response", route))
    }
}

#[async_trait]
impl MoodClassifier for ClassifierClient {
    async fn classify_emotions(&self, text: &str) -> Result<EmotionDistribution> {
        self.post_text("emotions", text).await
    }

    async fn classify_sentiment(&self, text: &str) -> Result<SentimentDistribution> {
        self.post_text("sentiment", text).await
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
