pub mod config;
mod http_layers;
pub mod metrics;
mod mood_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use mood_routes::make_mood_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
