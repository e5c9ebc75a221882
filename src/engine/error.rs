use thiserror::Error;

/// Typed failures of the mood engine. Callers branch on the kind instead of
/// matching on message strings.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required collaborator (catalog snapshot, classifier) is not
    /// available yet. Maps to a service-unavailable condition.
    #[error("model unavailable: {0}")]
    ModelUnavailable(&'static str),

    /// The input was rejected before any computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An unexpected arithmetic failure. Deterministic, so retrying is
    /// pointless; the detail is for diagnosis.
    #[error("internal computation error: {0}")]
    Internal(String),
}
