//! Emotion and sentiment distributions and the helpers shared by the
//! fusion and audio mapping paths.

use crate::engine::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Probability-like mapping from emotion label to nonnegative weight.
///
/// A `BTreeMap` keeps label iteration in ascending lexicographic order,
/// which is what makes dominant-label selection reproducible.
pub type EmotionDistribution = BTreeMap<String, f64>;

/// Sentiment classifier output. Field names follow the classifier's wire
/// labels; absent labels default to zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentDistribution {
    #[serde(rename = "POSITIVE", default)]
    pub positive: f64,
    #[serde(rename = "NEGATIVE", default)]
    pub negative: f64,
    #[serde(rename = "NEUTRAL", default)]
    pub neutral: f64,
}

impl SentimentDistribution {
    pub fn ensure_valid(&self) -> Result<(), EngineError> {
        for (label, value) in [
            ("POSITIVE", self.positive),
            ("NEGATIVE", self.negative),
            ("NEUTRAL", self.neutral),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidInput(format!(
                    "sentiment probability for {} is invalid: {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

/// What to do when a distribution's total weight is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroTotalPolicy {
    /// Leave the all-zero map untouched; dominant-label selection still
    /// yields a deterministic label with confidence 0.
    KeepZeros,
    /// Replace every weight with an equal share.
    Uniform,
}

/// Rejects distributions with negative or non-finite weights.
pub fn ensure_valid_distribution(dist: &EmotionDistribution) -> Result<(), EngineError> {
    for (label, &weight) in dist {
        if !weight.is_finite() || weight < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "emotion probability for {} is invalid: {}",
                label, weight
            )));
        }
    }
    Ok(())
}

/// Divides every weight by the total, or applies the given fallback policy
/// when the total is zero. The single zero-division guard for both the
/// fusion and audio mapping paths.
pub fn normalize_or(dist: &mut EmotionDistribution, policy: ZeroTotalPolicy) {
    let total: f64 = dist.values().sum();
    if total > 0.0 {
        for value in dist.values_mut() {
            *value /= total;
        }
        return;
    }
    if policy == ZeroTotalPolicy::Uniform && !dist.is_empty() {
        let share = 1.0 / dist.len() as f64;
        for value in dist.values_mut() {
            *value = share;
        }
    }
}

/// The label with the highest weight. Ties resolve to the lexicographically
/// smallest label, which is the first one encountered in map order.
/// Returns `None` only for an empty distribution.
pub fn dominant_label(dist: &EmotionDistribution) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (label, &weight) in dist {
        let better = match best {
            None => true,
            Some((_, best_weight)) => weight > best_weight,
        };
        if better {
            best = Some((label.as_str(), weight));
        }
    }
    best
}
