use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::RepositoryError;
use crate::domain::ids::UserId;
use crate::domain::reading::{CompletedBook, ProgressEvent};
use crate::domain::repositories::ProgressRepository;

#[derive(Debug, Default)]
struct UserHistory {
    events: Vec<ProgressEvent>,
    completed: Vec<CompletedBook>,
}

/// Repository backed by in-process maps.
///
/// Reference implementation of the storage seam; integration tests seed it
/// directly. Unknown users read as empty histories.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepository {
    histories: RwLock<HashMap<UserId, UserHistory>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_event(&self, user_id: UserId, event: ProgressEvent) {
        let mut histories = self
            .histories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        histories.entry(user_id).or_default().events.push(event);
    }

    pub fn insert_completed(&self, user_id: UserId, book: CompletedBook) {
        let mut histories = self
            .histories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        histories.entry(user_id).or_default().completed.push(book);
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn progress_events(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProgressEvent>, RepositoryError> {
        let histories = self
            .histories
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(histories
            .get(&user_id)
            .map(|history| history.events.clone())
            .unwrap_or_default())
    }

    async fn completed_books(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CompletedBook>, RepositoryError> {
        let histories = self
            .histories
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(histories
            .get(&user_id)
            .map(|history| history.completed.clone())
            .unwrap_or_default())
    }
}
