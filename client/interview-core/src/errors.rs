use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy for the session core.
///
/// Graded failures (`success: false` with a valid result set) and budget
/// exhaustion are normal outcomes, not errors; they never appear here. Every
/// variant is transient: the session stays usable after any failed request.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The execution request could not be completed or returned no
    /// interpretable payload. No penalty applies; the user may retry.
    #[error("execution service transport failure: {0}")]
    Transport(String),

    /// The execution service answered with a non-success HTTP status.
    #[error("execution service returned status {status}: {message}")]
    ExecutionService { status: u16, message: String },

    /// A second run/submit was issued while one is outstanding. Requests are
    /// serialized per session so every penalty is attributable to exactly
    /// one outcome.
    #[error("a run/submit request is already in flight for this session")]
    RequestInFlight,

    #[error("session is closed")]
    SessionClosed,

    #[error("unknown custom case id: {0}")]
    UnknownCustomCase(Uuid),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::InvalidConfig(err.to_string())
    }
}
