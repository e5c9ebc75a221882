mod file_config;

pub use file_config::{FileConfig, RecommendationsConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub classifier_url: Option<String>,
    pub classifier_timeout_sec: u64,
    pub default_limit: usize,
    pub max_limit: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub classifier_url: Option<String>,
    pub classifier_timeout_sec: u64,

    // Recommendation settings (with defaults)
    pub default_limit: usize,
    pub max_limit: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_path must be specified via CLI or in config file")
            })?;

        if !catalog_path.exists() {
            bail!("Catalog file does not exist: {:?}", catalog_path);
        }
        if !catalog_path.is_file() {
            bail!("catalog_path is not a file: {:?}", catalog_path);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let classifier_url = file.classifier_url.or_else(|| cli.classifier_url.clone());
        let classifier_timeout_sec = file
            .classifier_timeout_sec
            .unwrap_or(cli.classifier_timeout_sec);

        let rec_file = file.recommendations.unwrap_or_default();
        let default_limit = rec_file.default_limit.unwrap_or(cli.default_limit);
        let max_limit = rec_file.max_limit.unwrap_or(cli.max_limit);

        if default_limit == 0 {
            bail!("default_limit must be greater than zero");
        }
        if max_limit < default_limit {
            bail!(
                "max_limit ({}) must not be smaller than default_limit ({})",
                max_limit,
                default_limit
            );
        }

        Ok(Self {
            catalog_path,
            port,
            metrics_port,
            logging_level,
            classifier_url,
            classifier_timeout_sec,
            default_limit,
            max_limit,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
