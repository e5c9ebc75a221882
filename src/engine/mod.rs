//! The mood engine facade: fusion, scoring and ranking over the current
//! catalog snapshot.

mod error;

pub use error::EngineError;

use crate::catalog::{AudioDescriptor, CatalogSnapshot};
use crate::mood::{
    self, dominant_label, ensure_valid_distribution, EmotionDistribution, MoodVector,
    SentimentDistribution,
};
use crate::recommend::{self, ScoredRecommendation};
use std::sync::{Arc, RwLock};

/// Pure, synchronous mood computation plus the slot holding the current
/// catalog snapshot. The snapshot is only ever replaced as a whole; scoring
/// clones the `Arc` once per request and never observes a partial update.
pub struct MoodEngine {
    catalog: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodEngine {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(None),
        }
    }

    pub fn with_catalog(snapshot: CatalogSnapshot) -> Self {
        let engine = Self::new();
        engine.install_catalog(snapshot);
        engine
    }

    /// Installs a freshly loaded snapshot, replacing the previous one.
    /// Requests already holding the old `Arc` finish against it.
    pub fn install_catalog(&self, snapshot: CatalogSnapshot) {
        let mut slot = self.catalog.write().expect("catalog slot poisoned");
        *slot = Some(Arc::new(snapshot));
    }

    pub fn current_catalog(&self) -> Option<Arc<CatalogSnapshot>> {
        self.catalog.read().expect("catalog slot poisoned").clone()
    }

    pub fn has_catalog(&self) -> bool {
        self.catalog.read().expect("catalog slot poisoned").is_some()
    }

    /// Fuses classifier outputs into a mood vector with a 1-10 mood score
    /// (text path).
    pub fn fuse_mood(
        &self,
        emotions: &EmotionDistribution,
        sentiment: &SentimentDistribution,
    ) -> Result<MoodVector, EngineError> {
        ensure_valid_distribution(emotions)?;
        sentiment.ensure_valid()?;
        if emotions.is_empty() {
            return Err(EngineError::InvalidInput(
                "emotion distribution has no labels".to_string(),
            ));
        }

        let fused = mood::fuse(emotions, sentiment);
        let (dominant, confidence) = dominant_label(&fused).ok_or_else(|| {
            EngineError::Internal("fused distribution lost all labels".to_string())
        })?;
        let score = mood::mood_score(dominant, confidence);

        Ok(MoodVector {
            dominant_emotion: dominant.to_string(),
            confidence,
            mood_score: Some(score),
            emotions: fused,
        })
    }

    /// Maps audio descriptors into the shared emotion space (audio path,
    /// no mood score).
    pub fn mood_from_audio(&self, audio: &AudioDescriptor) -> Result<MoodVector, EngineError> {
        let emotions = mood::map_audio_to_emotions(audio)?;
        let (dominant, confidence) = dominant_label(&emotions).ok_or_else(|| {
            EngineError::Internal("audio mapping produced no labels".to_string())
        })?;

        Ok(MoodVector {
            dominant_emotion: dominant.to_string(),
            confidence,
            mood_score: None,
            emotions,
        })
    }

    /// Scores the current catalog snapshot against the mood distribution
    /// and returns the top `limit` tracks, deterministically ordered.
    pub fn recommend(
        &self,
        emotions: &EmotionDistribution,
        limit: usize,
    ) -> Result<Vec<ScoredRecommendation>, EngineError> {
        if limit == 0 {
            return Err(EngineError::InvalidInput(
                "limit must be greater than zero".to_string(),
            ));
        }
        ensure_valid_distribution(emotions)?;
        let (dominant, _) = dominant_label(emotions).ok_or_else(|| {
            EngineError::InvalidInput("emotion distribution has no labels".to_string())
        })?;

        let snapshot = self
            .current_catalog()
            .ok_or(EngineError::ModelUnavailable("catalog snapshot not loaded"))?;

        let scored = recommend::score_catalog(dominant, &snapshot);
        Ok(recommend::rank(scored, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Track;
    use std::collections::BTreeSet;

    fn dist(entries: &[(&str, f64)]) -> EmotionDistribution {
        entries
            .iter()
            .map(|(label, weight)| (label.to_string(), *weight))
            .collect()
    }

    fn track(id: &str, mood_tags: &[&str], valence: f64, energy: f64) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Title {}", id),
            artist: "Artist".to_string(),
            genre_tags: BTreeSet::new(),
            mood_tags: mood_tags.iter().map(|t| t.to_string()).collect(),
            audio: AudioDescriptor {
                valence: Some(valence),
                energy: Some(energy),
                danceability: Some(0.5),
                ..Default::default()
            },
        }
    }

    fn engine_with_two_tracks() -> MoodEngine {
        MoodEngine::with_catalog(CatalogSnapshot::new(vec![
            track("sample_track_1", &["calm", "peaceful"], 0.8, 0.3),
            track("sample_track_2", &["energetic", "happy"], 0.9, 0.8),
        ]))
    }

    #[test]
    fn fuse_mood_returns_consistent_vector() {
        let engine = MoodEngine::new();
        let emotions = dist(&[
            ("joy", 0.4),
            ("sadness", 0.3),
            ("anger", 0.2),
            ("fear", 0.1),
        ]);
        let sentiment = SentimentDistribution {
            positive: 0.7,
            negative: 0.1,
            neutral: 0.2,
        };

        let mood = engine.fuse_mood(&emotions, &sentiment).unwrap();

        assert_eq!(mood.dominant_emotion, "joy");
        assert_eq!(mood.confidence, mood.emotions["joy"]);
        assert!((mood.emotions.values().sum::<f64>() - 1.0).abs() < 1e-9);
        let score = mood.mood_score.unwrap();
        assert!((score - 8.888888888888).abs() < 1e-6);
    }

    #[test]
    fn fuse_mood_rejects_empty_distribution() {
        let engine = MoodEngine::new();
        let result = engine.fuse_mood(&EmotionDistribution::new(), &Default::default());
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn fuse_mood_all_zero_resolves_deterministically() {
        let engine = MoodEngine::new();
        let emotions = dist(&[("sadness", 0.0), ("joy", 0.0), ("fear", 0.0)]);
        let mood = engine.fuse_mood(&emotions, &Default::default()).unwrap();

        assert_eq!(mood.dominant_emotion, "fear");
        assert_eq!(mood.confidence, 0.0);
    }

    #[test]
    fn mood_from_audio_has_no_mood_score() {
        let engine = MoodEngine::new();
        let audio = AudioDescriptor {
            valence: Some(0.8),
            energy: Some(0.3),
            danceability: Some(0.2),
            ..Default::default()
        };

        let mood = engine.mood_from_audio(&audio).unwrap();

        assert_eq!(mood.dominant_emotion, "joy");
        assert!(mood.mood_score.is_none());
        assert!((mood.emotions.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn recommend_without_catalog_is_unavailable() {
        let engine = MoodEngine::new();
        let result = engine.recommend(&dist(&[("joy", 1.0)]), 5);
        assert!(matches!(result, Err(EngineError::ModelUnavailable(_))));
    }

    #[test]
    fn recommend_rejects_zero_limit() {
        let engine = engine_with_two_tracks();
        let result = engine.recommend(&dist(&[("joy", 1.0)]), 0);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn recommend_prefers_joy_aligned_track() {
        let engine = engine_with_two_tracks();
        let recommendations = engine.recommend(&dist(&[("joy", 1.0)]), 1).unwrap();

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].track_id, "sample_track_2");
    }

    #[test]
    fn recommend_limit_exceeding_catalog_returns_everything() {
        let engine = engine_with_two_tracks();
        let recommendations = engine.recommend(&dist(&[("joy", 1.0)]), 50).unwrap();
        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn recommend_is_deterministic() {
        let engine = engine_with_two_tracks();
        let emotions = dist(&[("sadness", 0.6), ("joy", 0.4)]);

        let first = engine.recommend(&emotions, 10).unwrap();
        let second = engine.recommend(&emotions, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn install_catalog_swaps_snapshot() {
        let engine = engine_with_two_tracks();
        assert_eq!(engine.current_catalog().unwrap().tracks_count(), 2);

        engine.install_catalog(CatalogSnapshot::new(vec![track(
            "only", &["happy"], 0.9, 0.9,
        )]));

        assert_eq!(engine.current_catalog().unwrap().tracks_count(), 1);
    }
}
