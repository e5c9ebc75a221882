//! Deterministic ordering and truncation of scored recommendations.

use super::ScoredRecommendation;

/// Sorts by score descending, breaking ties by track id ascending so equal
/// scores never depend on catalog iteration order, then keeps the first
/// `limit` entries. A limit beyond the catalog size returns everything.
pub fn rank(mut scored: Vec<ScoredRecommendation>, limit: usize) -> Vec<ScoredRecommendation> {
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.track_id.cmp(&b.track_id))
    });
    scored.truncate(limit);
    scored
}
