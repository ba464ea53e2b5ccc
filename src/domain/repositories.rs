use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::ids::UserId;
use crate::domain::reading::{CompletedBook, ProgressEvent};

/// Access to a user's recorded reading history.
///
/// Implementations own all fetch-failure handling; collections handed to
/// the analytics engine are assumed to be access-checked already.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Full progress-event history for the user, in no particular order.
    async fn progress_events(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProgressEvent>, RepositoryError>;

    /// Books the user has marked finished.
    async fn completed_books(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CompletedBook>, RepositoryError>;
}
