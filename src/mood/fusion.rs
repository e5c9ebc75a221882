//! Merging an emotion distribution with a sentiment distribution into one
//! adjusted, renormalized emotion distribution.

use super::distribution::{normalize_or, EmotionDistribution, SentimentDistribution, ZeroTotalPolicy};

/// Sentiment probability a branch must exceed before it boosts anything.
const SENTIMENT_THRESHOLD: f64 = 0.5;

/// Multiplier applied to the boosted emotion weights.
const BOOST_FACTOR: f64 = 1.2;

const POSITIVE_EMOTIONS: [&str; 3] = ["joy", "love", "optimism"];
const NEGATIVE_EMOTIONS: [&str; 3] = ["sadness", "anger", "fear"];

/// Adjusts the emotion distribution with the sentiment signal and
/// renormalizes. At most one branch fires: a dominant positive sentiment
/// boosts the positive emotions, a dominant negative one the negative
/// emotions. Labels absent from the input stay absent. An all-zero result
/// is left all-zero; dominant-label selection still resolves it
/// deterministically downstream.
pub fn fuse(
    emotions: &EmotionDistribution,
    sentiment: &SentimentDistribution,
) -> EmotionDistribution {
    let mut combined = emotions.clone();

    let boosted: &[&str] = if sentiment.positive > SENTIMENT_THRESHOLD {
        &POSITIVE_EMOTIONS
    } else if sentiment.negative > SENTIMENT_THRESHOLD {
        &NEGATIVE_EMOTIONS
    } else {
        &[]
    };

    for label in boosted {
        if let Some(weight) = combined.get_mut(*label) {
            *weight *= BOOST_FACTOR;
        }
    }

    normalize_or(&mut combined, ZeroTotalPolicy::KeepZeros);
    combined
}
