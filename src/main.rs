use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swarloop_mood_server::classifier::{ClassifierClient, MoodClassifier};
use swarloop_mood_server::config::{AppConfig, CliConfig, FileConfig};
use swarloop_mood_server::engine::MoodEngine;
use swarloop_mood_server::server::{metrics, run_server};
use swarloop_mood_server::{load_catalog, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog file with track metadata and audio features.
    #[clap(value_parser = parse_path)]
    pub catalog_path: Option<PathBuf>,

    /// Path to an optional TOML config file; its values override CLI flags.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8600)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9100)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Base URL of the external text classification service.
    #[clap(long)]
    pub classifier_url: Option<String>,

    /// Timeout in seconds for classifier requests.
    #[clap(long, default_value_t = 30)]
    pub classifier_timeout_sec: u64,

    /// Number of recommendations returned when a request doesn't name a limit.
    #[clap(long, default_value_t = 10)]
    pub default_limit: usize,

    /// Hard cap on requested recommendation counts.
    #[clap(long, default_value_t = 100)]
    pub max_limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        catalog_path: cli_args.catalog_path,
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
        classifier_url: cli_args.classifier_url,
        classifier_timeout_sec: cli_args.classifier_timeout_sec,
        default_limit: cli_args.default_limit,
        max_limit: cli_args.max_limit,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Loading catalog from {:?}...", config.catalog_path);
    let snapshot = load_catalog(&config.catalog_path)?;

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_catalog_metrics(snapshot.tracks_count());

    let engine = Arc::new(MoodEngine::with_catalog(snapshot));

    // Create classifier client if URL is configured
    let classifier: Option<Arc<dyn MoodClassifier>> = match config.classifier_url.clone() {
        Some(url) => {
            info!("Classifier service configured at {}", url);
            Some(Arc::new(ClassifierClient::new(
                url,
                config.classifier_timeout_sec,
            )?) as Arc<dyn MoodClassifier>)
        }
        None => {
            info!("No classifier configured, text mood analysis will be unavailable");
            None
        }
    };

    info!("Ready to serve at port {}!", config.port);
    info!("Metrics available at port {}!", config.metrics_port);
    run_server(
        engine,
        classifier,
        config.catalog_path.clone(),
        config.logging_level.clone(),
        config.port,
        config.metrics_port,
        config.default_limit,
        config.max_limit,
    )
    .await
}
