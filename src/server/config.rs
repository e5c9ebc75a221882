use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Limit applied when a recommendation request doesn't name one.
    pub default_limit: usize,
    /// Hard cap on requested recommendation counts.
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 8600,
            default_limit: 10,
            max_limit: 100,
        }
    }
}
