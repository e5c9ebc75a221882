//! Dominant emotion + confidence to a 1-10 mood scalar.

/// Base mood score for a dominant emotion. Unrecognized labels sit in the
/// middle of the scale.
pub fn base_score(emotion: &str) -> f64 {
    match emotion {
        "joy" => 9.0,
        "love" => 8.0,
        "optimism" => 7.0,
        "surprise" => 6.0,
        "neutral" => 5.0,
        "sadness" => 3.0,
        "anger" => 2.0,
        "fear" => 2.0,
        _ => 5.0,
    }
}

/// Shifts the base score by up to ±1 depending on how far the confidence
/// sits from 0.5, clamped to the 1-10 scale.
pub fn mood_score(emotion: &str, confidence: f64) -> f64 {
    let adjusted = base_score(emotion) + (confidence - 0.5) * 2.0;
    adjusted.clamp(1.0, 10.0)
}
