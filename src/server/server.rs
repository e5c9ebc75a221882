use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{error, info};

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::{log_requests, make_mood_routes, state::*, RequestsLoggingLevel, ServerConfig};
use crate::catalog::load_catalog;
use crate::server::metrics;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

#[derive(Serialize)]
struct ModelsLoaded {
    classifier: bool,
    catalog: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    models_loaded: ModelsLoaded,
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    let classifier = match &state.classifier {
        Some(classifier) => classifier.is_ready().await,
        None => false,
    };
    let catalog = state.engine.has_catalog();

    Json(HealthResponse {
        status: "healthy",
        models_loaded: ModelsLoaded {
            classifier,
            catalog,
        },
    })
}

#[derive(Serialize)]
struct ReloadResponse {
    tracks: usize,
}

/// Re-reads the catalog file and installs the new snapshot with a single
/// reference swap; in-flight requests finish against the old one.
async fn reload_catalog(State(state): State<ServerState>) -> Response {
    match load_catalog(&state.catalog_path) {
        Ok(snapshot) => {
            let tracks = snapshot.tracks_count();
            state.engine.install_catalog(snapshot);
            metrics::init_catalog_metrics(tracks);
            metrics::record_catalog_reload("ok");
            info!("Catalog reloaded with {} tracks", tracks);
            Json(ReloadResponse { tracks }).into_response()
        }
        Err(err) => {
            error!("Catalog reload failed: {:#}", err);
            metrics::record_catalog_reload("failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Catalog reload failed: {}", err) })),
            )
                .into_response()
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    engine: SharedEngine,
    classifier: OptionalClassifier,
    catalog_path: PathBuf,
) -> Router {
    let state = ServerState {
        config,
        start_time: Instant::now(),
        engine,
        classifier,
        catalog_path,
        hash: env!("GIT_HASH").to_owned(),
    };

    let admin_routes: Router = Router::new()
        .route("/catalog/reload", post(reload_catalog))
        .with_state(state.clone());

    let mood_routes = make_mood_routes(state.clone());

    let mut app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .with_state(state.clone())
        .nest("/v1", mood_routes)
        .nest("/v1/admin", admin_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(super::slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics::metrics_handler))
}

pub async fn run_server(
    engine: SharedEngine,
    classifier: OptionalClassifier,
    catalog_path: PathBuf,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    metrics_port: u16,
    default_limit: usize,
    max_limit: usize,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        default_limit,
        max_limit,
    };
    let app = make_app(config, engine, classifier, catalog_path);

    let metrics_listener =
        tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port)).await?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server failed: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
