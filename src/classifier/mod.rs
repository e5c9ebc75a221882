mod client;

pub use client::ClassifierClient;

use crate::mood::{EmotionDistribution, SentimentDistribution};
use anyhow::Result;
use async_trait::async_trait;

/// Black-box text classifiers: text in, label/probability maps out.
/// The emotion map covers at least joy, sadness, anger, fear, surprise,
/// neutral, love and optimism; the sentiment map covers
/// POSITIVE/NEGATIVE/NEUTRAL. Both sum to roughly one.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    async fn classify_emotions(&self, text: &str) -> Result<EmotionDistribution>;

    async fn classify_sentiment(&self, text: &str) -> Result<SentimentDistribution>;

    /// Whether the classifier backend is reachable and ready.
    async fn is_ready(&self) -> bool;
}

/// Classifier returning fixed distributions regardless of input. Useful in
/// tests and when running without a classifier backend.
pub struct StaticClassifier {
    emotions: EmotionDistribution,
    sentiment: SentimentDistribution,
}

impl StaticClassifier {
    pub fn new(emotions: EmotionDistribution, sentiment: SentimentDistribution) -> Self {
        Self {
            emotions,
            sentiment,
        }
    }
}

#[async_trait]
impl MoodClassifier for StaticClassifier {
    async fn classify_emotions(&self, _text: &str) -> Result<EmotionDistribution> {
        Ok(self.emotions.clone())
    }

    async fn classify_sentiment(&self, _text: &str) -> Result<SentimentDistribution> {
        Ok(self.sentiment.clone())
    }

    async fn is_ready(&self) -> bool {
        true
    }
}
