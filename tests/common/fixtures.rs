//! Test fixtures: catalog files and classifier outputs.

use swarloop_mood_server::mood::{EmotionDistribution, SentimentDistribution};
use swarloop_mood_server::StaticClassifier;
use tempfile::TempDir;

pub const CALM_TRACK_ID: &str = "sample_track_1";
pub const ENERGETIC_TRACK_ID: &str = "sample_track_2";

/// Writes the standard two-track catalog and returns the owning temp dir
/// plus the file inside it.
pub fn create_test_catalog() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, test_catalog_json()).expect("Failed to write test catalog");
    (dir, path)
}

pub fn test_catalog_json() -> String {
    format!(
        r#"[
            {{
                "id": "{CALM_TRACK_ID}",
                "title": "Calm Song",
                "artist": "Artist 1",
                "genre_tags": ["ambient", "calm"],
                "mood_tags": ["calm", "peaceful"],
                "audio_features": {{"tempo": 60, "valence": 0.8, "energy": 0.3, "danceability": 0.2}}
            }},
            {{
                "id": "{ENERGETIC_TRACK_ID}",
                "title": "Energetic Song",
                "artist": "Artist 2",
                "genre_tags": ["electronic", "dance"],
                "mood_tags": ["energetic", "happy"],
                "audio_features": {{"tempo": 128, "valence": 0.9, "energy": 0.8, "danceability": 0.9}}
            }}
        ]"#
    )
}

/// Classifier stub with a joyful emotion read and a positive sentiment.
pub fn joyful_classifier() -> StaticClassifier {
    let mut emotions = EmotionDistribution::new();
    emotions.insert("joy".to_string(), 0.4);
    emotions.insert("sadness".to_string(), 0.3);
    emotions.insert("anger".to_string(), 0.2);
    emotions.insert("fear".to_string(), 0.1);

    let sentiment = SentimentDistribution {
        positive: 0.7,
        negative: 0.1,
        neutral: 0.2,
    };

    StaticClassifier::new(emotions, sentiment)
}
