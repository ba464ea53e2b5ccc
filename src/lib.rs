//! Reading-statistics aggregation engine.
//!
//! Derives day streaks, daily-activity windows, and weekly/monthly
//! page-count rollups from a raw log of reading-progress events, with civil
//! days bucketed in a caller-supplied IANA time zone (UTC when none is
//! given). The engine is pure: "now" is an explicit parameter, inputs are
//! never mutated, and identical inputs produce identical output.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::services::{compute_user_stats, compute_user_stats_at};
pub use domain::analytics::calendar::WeekStart;
pub use domain::analytics::stats::{
    DEFAULT_WINDOW_DAYS, DerivedStats, StatsOptions, compute_derived_stats,
};
pub use domain::errors::{RepositoryError, StatsError};
pub use domain::repositories::ProgressRepository;
pub use infrastructure::repositories::InMemoryProgressRepository;
