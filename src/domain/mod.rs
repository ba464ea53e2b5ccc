pub mod analytics;
pub mod errors;
pub mod ids;
pub mod reading;
pub mod repositories;

// Re-exports
pub use analytics::{activity, calendar, stats, streaks};
pub use errors::{RepositoryError, StatsError};
