//! Scoring catalog tracks against a dominant emotion.

use super::ScoredRecommendation;
use crate::catalog::{CatalogSnapshot, Track};

const TAG_MATCH_WEIGHT: f64 = 0.5;
const VALENCE_WEIGHT: f64 = 0.3;
const ENERGY_WEIGHT: f64 = 0.2;

/// Target mood tags for a dominant emotion. Negative emotions map to
/// counterbalancing tags rather than matching ones.
pub fn target_mood_tags(dominant_emotion: &str) -> &'static [&'static str] {
    match dominant_emotion {
        "joy" => &["happy", "uplifting", "energetic"],
        "sadness" => &["melancholic", "introspective", "calm"],
        "anger" => &["calm", "peaceful", "meditative"],
        "fear" => &["calm", "peaceful", "ambient"],
        "love" => &["romantic", "warm", "uplifting"],
        "surprise" => &["energetic", "uplifting", "happy"],
        _ => &["neutral"],
    }
}

/// Audio affinity is only modeled for joy and sadness; other dominant
/// emotions contribute nothing here. The remaining arms are the extension
/// point if affinity formulas are ever defined for them.
fn audio_score(dominant_emotion: &str, track: &Track) -> f64 {
    let valence = track.audio.valence_or_default();
    let energy = track.audio.energy_or_default();
    match dominant_emotion {
        "joy" => valence * VALENCE_WEIGHT + energy * ENERGY_WEIGHT,
        "sadness" => (1.0 - valence) * VALENCE_WEIGHT + (1.0 - energy) * ENERGY_WEIGHT,
        _ => 0.0,
    }
}

fn score_track(
    dominant_emotion: &str,
    targets: &[&'static str],
    track: &Track,
) -> ScoredRecommendation {
    let matching_tags: Vec<&str> = track
        .mood_tags
        .iter()
        .map(|tag| tag.as_str())
        .filter(|tag| targets.contains(tag))
        .collect();

    let tag_score = matching_tags.len() as f64 * TAG_MATCH_WEIGHT;
    let score = tag_score + audio_score(dominant_emotion, track);

    ScoredRecommendation {
        track_id: track.id.clone(),
        title: track.title.clone(),
        artist: track.artist.clone(),
        score,
        rationale: format!(
            "Matches {:?} mood tags for {}",
            matching_tags, dominant_emotion
        ),
    }
}

/// Scores every track in the snapshot. Output order follows catalog order;
/// ranking happens separately.
pub fn score_catalog(dominant_emotion: &str, snapshot: &CatalogSnapshot) -> Vec<ScoredRecommendation> {
    let targets = target_mood_tags(dominant_emotion);
    snapshot
        .tracks()
        .iter()
        .map(|track| score_track(dominant_emotion, targets, track))
        .collect()
}
