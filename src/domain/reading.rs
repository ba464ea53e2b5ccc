use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{BookId, ProgressEventId, UserBookId};

/// One recorded progress update for a book a user is reading.
///
/// `pages_read` is the delta since the previous recorded point, not
/// cumulative progress. Events arrive in arbitrary order; nothing here
/// assumes they are sorted by `recorded_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressEvent {
    pub id: ProgressEventId,
    pub user_book_id: UserBookId,
    /// Display title of the book at the time the event was recorded.
    pub book_title: String,
    pub pages_read: i64,
    pub recorded_at: DateTime<Utc>,
}

/// A book the user has marked finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedBook {
    pub id: BookId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub completed_at: DateTime<Utc>,
}
