mod ranker;
mod scorer;

pub use ranker::rank;
pub use scorer::{score_catalog, target_mood_tags};

use serde::{Deserialize, Serialize};

/// One scored catalog track with a human-readable rationale. The score is
/// never negative; the rationale wording is presentation, not contract.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoredRecommendation {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub score: f64,
    pub rationale: String,
}
