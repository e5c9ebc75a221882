//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.

mod client;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use fixtures::{CALM_TRACK_ID, ENERGETIC_TRACK_ID};
pub use server::TestServer;
