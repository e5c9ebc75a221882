//! Mood analysis and recommendation API routes

use crate::catalog::AudioDescriptor;
use crate::engine::EngineError;
use crate::mood::{EmotionDistribution, MoodVector};
use crate::recommend::ScoredRecommendation;
use crate::server::metrics;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::state::ServerState;

#[derive(Deserialize)]
struct TextMoodBody {
    pub text: String,

    /// Accepted for wire compatibility with classifier callers; results are
    /// not gated on it.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

fn default_confidence_threshold() -> f64 {
    0.5
}

#[derive(Serialize)]
struct MoodAnalysisResponse {
    emotions: EmotionDistribution,
    dominant_emotion: String,
    confidence: f64,
    /// 1-10 scale
    mood_score: f64,
}

#[derive(Deserialize)]
struct AudioMoodBody {
    pub audio_features: AudioDescriptor,
}

#[derive(Serialize)]
struct AudioMoodResponse {
    emotions: EmotionDistribution,
    dominant_emotion: String,
    confidence: f64,
}

#[derive(Deserialize)]
struct RecommendBody {
    pub mood_emotions: EmotionDistribution,

    /// Maximum number of recommendations to return (default from config)
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct RecommendResponse {
    recommendations: Vec<ScoredRecommendation>,
    model_version: String,
    reasoning: String,
}

fn engine_error_response(err: EngineError, endpoint: &'static str) -> Response {
    let (status, error_type) = match &err {
        EngineError::ModelUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "model_unavailable"),
        EngineError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        EngineError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    error!("{} failed: {}", endpoint, err);
    metrics::record_error(error_type, endpoint);
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

fn classifier_failure_response(err: anyhow::Error, endpoint: &'static str) -> Response {
    error!("Classifier call failed on {}: {:#}", endpoint, err);
    metrics::record_error("classifier", endpoint);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": "classifier request failed" })),
    )
        .into_response()
}

async fn analyze_text_mood(
    State(state): State<ServerState>,
    Json(payload): Json<TextMoodBody>,
) -> Response {
    const ENDPOINT: &str = "/v1/mood/text";

    let classifier = match &state.classifier {
        Some(classifier) => classifier,
        None => {
            return engine_error_response(
                EngineError::ModelUnavailable("classifier not configured"),
                ENDPOINT,
            )
        }
    };

    if payload.text.trim().is_empty() {
        return engine_error_response(
            EngineError::InvalidInput("text must not be empty".to_string()),
            ENDPOINT,
        );
    }
    if !(0.0..=1.0).contains(&payload.confidence_threshold) {
        return engine_error_response(
            EngineError::InvalidInput(format!(
                "confidence_threshold must be within [0, 1], got {}",
                payload.confidence_threshold
            )),
            ENDPOINT,
        );
    }

    let emotions = match classifier.classify_emotions(&payload.text).await {
        Ok(emotions) => emotions,
        Err(err) => return classifier_failure_response(err, ENDPOINT),
    };
    let sentiment = match classifier.classify_sentiment(&payload.text).await {
        Ok(sentiment) => sentiment,
        Err(err) => return classifier_failure_response(err, ENDPOINT),
    };

    match state.engine.fuse_mood(&emotions, &sentiment) {
        Ok(mood) => {
            metrics::record_mood_analysis("text");
            Json(text_response(mood)).into_response()
        }
        Err(err) => engine_error_response(err, ENDPOINT),
    }
}

fn text_response(mood: MoodVector) -> MoodAnalysisResponse {
    // The text path always computes a mood score
    let mood_score = mood.mood_score.unwrap_or(5.0);
    MoodAnalysisResponse {
        emotions: mood.emotions,
        dominant_emotion: mood.dominant_emotion,
        confidence: mood.confidence,
        mood_score,
    }
}

async fn analyze_audio_mood(
    State(state): State<ServerState>,
    Json(payload): Json<AudioMoodBody>,
) -> Response {
    const ENDPOINT: &str = "/v1/mood/audio";

    match state.engine.mood_from_audio(&payload.audio_features) {
        Ok(mood) => {
            metrics::record_mood_analysis("audio");
            Json(AudioMoodResponse {
                emotions: mood.emotions,
                dominant_emotion: mood.dominant_emotion,
                confidence: mood.confidence,
            })
            .into_response()
        }
        Err(err) => engine_error_response(err, ENDPOINT),
    }
}

async fn recommend_music(
    State(state): State<ServerState>,
    Json(payload): Json<RecommendBody>,
) -> Response {
    const ENDPOINT: &str = "/v1/recommend";

    let limit = payload
        .limit
        .unwrap_or(state.config.default_limit)
        .min(state.config.max_limit);

    match state.engine.recommend(&payload.mood_emotions, limit) {
        Ok(recommendations) => {
            metrics::record_recommendations_served();
            let reasoning = format!(
                "Based on mood analysis: {:?}",
                payload.mood_emotions.keys().collect::<Vec<_>>()
            );
            Json(RecommendResponse {
                recommendations,
                model_version: env!("CARGO_PKG_VERSION").to_string(),
                reasoning,
            })
            .into_response()
        }
        Err(err) => engine_error_response(err, ENDPOINT),
    }
}

pub fn make_mood_routes(state: ServerState) -> Router {
    Router::new()
        .route("/mood/text", post(analyze_text_mood))
        .route("/mood/audio", post(analyze_audio_mood))
        .route("/recommend", post(recommend_music))
        .with_state(state)
}
