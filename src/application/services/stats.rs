use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::RepositoryError;
use crate::domain::ids::UserId;
use crate::domain::repositories::ProgressRepository;
use crate::domain::stats::{DerivedStats, StatsOptions, compute_derived_stats};

/// Fetches a user's history and derives a stats snapshot relative to the
/// given instant. Logs the total computation time on success.
pub async fn compute_user_stats_at(
    repo: &dyn ProgressRepository,
    user_id: UserId,
    now: DateTime<Utc>,
    options: &StatsOptions,
) -> Result<DerivedStats, RepositoryError> {
    let start = Instant::now();

    let (events, completed) = tokio::join!(
        repo.progress_events(user_id),
        repo.completed_books(user_id),
    );
    let stats = compute_derived_stats(&events?, &completed?, now, options);

    info!(duration_ms = start.elapsed().as_millis(), %user_id, "stats computed");
    Ok(stats)
}

/// Derives a stats snapshot at the current wall-clock time.
pub async fn compute_user_stats(
    repo: &dyn ProgressRepository,
    user_id: UserId,
    options: &StatsOptions,
) -> Result<DerivedStats, RepositoryError> {
    compute_user_stats_at(repo, user_id, Utc::now(), options).await
}
