use axum::extract::FromRef;

use crate::classifier::MoodClassifier;
use crate::engine::MoodEngine;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedEngine = Arc<MoodEngine>;
pub type OptionalClassifier = Option<Arc<dyn MoodClassifier>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub engine: SharedEngine,
    pub classifier: OptionalClassifier,
    /// Source file re-read on catalog reloads.
    pub catalog_path: PathBuf,
    pub hash: String,
}

impl FromRef<ServerState> for SharedEngine {
    fn from_ref(input: &ServerState) -> Self {
        input.engine.clone()
    }
}

impl FromRef<ServerState> for OptionalClassifier {
    fn from_ref(input: &ServerState) -> Self {
        input.classifier.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
