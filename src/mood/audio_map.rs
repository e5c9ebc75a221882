//! Audio descriptors to an emotion distribution over joy/sadness/anger/fear.

use super::distribution::{normalize_or, EmotionDistribution, ZeroTotalPolicy};
use crate::catalog::AudioDescriptor;
use crate::engine::EngineError;

const DANCEABILITY_JOY_WEIGHT: f64 = 0.3;
const ENERGY_ANGER_WEIGHT: f64 = 0.7;
const ENERGY_FEAR_WEIGHT: f64 = 0.3;

/// Maps valence/energy/danceability into the shared emotion space, so the
/// audio path produces the same distribution shape as text fusion. Missing
/// fields default to 0.5. A zero-total result falls back to the uniform
/// distribution over the four labels.
pub fn map_audio_to_emotions(audio: &AudioDescriptor) -> Result<EmotionDistribution, EngineError> {
    for (field, value) in [
        ("valence", audio.valence),
        ("energy", audio.energy),
        ("danceability", audio.danceability),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidInput(format!(
                    "audio descriptor field {} must be within [0, 1], got {}",
                    field, value
                )));
            }
        }
    }

    let valence = audio.valence_or_default();
    let energy = audio.energy_or_default();
    let danceability = audio.danceability_or_default();

    let mut emotions = EmotionDistribution::new();
    emotions.insert(
        "joy".to_string(),
        valence + danceability * DANCEABILITY_JOY_WEIGHT,
    );
    emotions.insert("sadness".to_string(), 1.0 - valence);
    emotions.insert("anger".to_string(), energy * ENERGY_ANGER_WEIGHT);
    emotions.insert("fear".to_string(), energy * ENERGY_FEAR_WEIGHT);

    normalize_or(&mut emotions, ZeroTotalPolicy::Uniform);
    Ok(emotions)
}
