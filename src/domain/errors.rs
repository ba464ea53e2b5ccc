use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("unexpected repository error: {0}")]
    Unexpected(String),
}

impl RepositoryError {
    pub fn unexpected<T: ToString>(message: T) -> Self {
        RepositoryError::Unexpected(message.to_string())
    }
}

/// Failures when building stats preferences from caller-supplied strings.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StatsError {
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("unknown week start: {0}")]
    UnknownWeekStart(String),
}
