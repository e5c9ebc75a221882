//! SwarLoop Mood Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod mood;
pub mod recommend;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, CatalogSnapshot, Track};
pub use classifier::{ClassifierClient, MoodClassifier, StaticClassifier};
pub use engine::{EngineError, MoodEngine};
pub use server::{run_server, RequestsLoggingLevel};
