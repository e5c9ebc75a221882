//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own catalog file.

use super::fixtures::{create_test_catalog, joyful_classifier};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use swarloop_mood_server::classifier::MoodClassifier;
use swarloop_mood_server::engine::MoodEngine;
use swarloop_mood_server::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use swarloop_mood_server::{load_catalog, StaticClassifier};
use tempfile::TempDir;
use tokio::net::TcpListener;

const SERVER_READY_TIMEOUT_MS: u64 = 5000;
const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Path to the catalog file, for tests that rewrite it before a reload
    pub catalog_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with a stub classifier.
    pub async fn spawn() -> Self {
        Self::spawn_with_classifier(Some(Arc::new(joyful_classifier()))).await
    }

    /// Spawns a server without any classifier configured, so text mood
    /// requests hit the model-unavailable path.
    pub async fn spawn_without_classifier() -> Self {
        Self::spawn_with_classifier(None).await
    }

    /// Spawns a test server with the given classifier
    ///
    /// This function:
    /// 1. Creates a temporary catalog with test tracks
    /// 2. Loads the catalog into a fresh engine
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if catalog creation or loading fails, port binding fails,
    /// or the server doesn't become ready within the timeout.
    pub async fn spawn_with_classifier(classifier: Option<Arc<StaticClassifier>>) -> Self {
        // Create temporary catalog file
        let (temp_catalog_dir, catalog_path) = create_test_catalog();

        let snapshot = load_catalog(&catalog_path).expect("Failed to load test catalog");
        let engine = Arc::new(MoodEngine::with_catalog(snapshot));

        let classifier: Option<Arc<dyn MoodClassifier>> =
            classifier.map(|c| c as Arc<dyn MoodClassifier>);

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            default_limit: 10,
            max_limit: 100,
        };

        let app = make_app(config, engine, classifier, catalog_path.clone());

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog_path,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir cleans up the catalog file automatically
    }
}
