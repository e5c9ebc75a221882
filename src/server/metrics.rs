use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all SwarLoop metrics
const PREFIX: &str = "swarloop";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Mood Analysis Metrics
    pub static ref MOOD_ANALYSES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_mood_analyses_total"), "Mood analyses by input source"),
        &["source"]
    ).expect("Failed to create mood_analyses_total metric");

    pub static ref RECOMMENDATIONS_SERVED_TOTAL: Counter = Counter::new(
        format!("{PREFIX}_recommendations_served_total"),
        "Total recommendation requests served"
    ).expect("Failed to create recommendations_served_total metric");

    // Catalog Metrics
    pub static ref CATALOG_TRACKS_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_catalog_tracks_total"),
        "Tracks in the current catalog snapshot"
    ).expect("Failed to create catalog_tracks_total metric");

    pub static ref CATALOG_RELOADS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_catalog_reloads_total"), "Catalog reloads by outcome"),
        &["status"]
    ).expect("Failed to create catalog_reloads_total metric");

    // Error Metrics
    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Total errors by type and endpoint"),
        &["error_type", "endpoint"]
    ).expect("Failed to create errors_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(MOOD_ANALYSES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(RECOMMENDATIONS_SERVED_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CATALOG_TRACKS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CATALOG_RELOADS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ERRORS_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize catalog-specific metrics
pub fn init_catalog_metrics(num_tracks: usize) {
    CATALOG_TRACKS_TOTAL.set(num_tracks as f64);
}

/// Record an HTTP request with its duration
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a completed mood analysis ("text" or "audio")
pub fn record_mood_analysis(source: &str) {
    MOOD_ANALYSES_TOTAL.with_label_values(&[source]).inc();
}

pub fn record_recommendations_served() {
    RECOMMENDATIONS_SERVED_TOTAL.inc();
}

pub fn record_catalog_reload(status: &str) {
    CATALOG_RELOADS_TOTAL.with_label_values(&[status]).inc();
}

/// Record an error by type and endpoint
pub fn record_error(error_type: &str, endpoint: &str) {
    ERRORS_TOTAL
        .with_label_values(&[error_type, endpoint])
        .inc();
}

/// Handler for the /metrics endpoint (Prometheus scraping)
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();

    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => match String::from_utf8(buffer) {
            Ok(body) => (StatusCode::OK, body).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
                .into_response(),
        },
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {}", e),
        )
            .into_response(),
    }
}
