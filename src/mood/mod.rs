mod audio_map;
mod distribution;
mod fusion;
mod score;

pub use audio_map::map_audio_to_emotions;
pub use distribution::{
    dominant_label, ensure_valid_distribution, normalize_or, EmotionDistribution,
    SentimentDistribution, ZeroTotalPolicy,
};
pub use fusion::fuse;
pub use score::{base_score, mood_score};

use serde::{Deserialize, Serialize};

/// A fused mood representation: the adjusted emotion distribution plus the
/// derived dominant emotion and its weight. `mood_score` is only present on
/// the text analysis path; the audio path does not define one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodVector {
    pub emotions: EmotionDistribution,
    pub dominant_emotion: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_score: Option<f64>,
}
