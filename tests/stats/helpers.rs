use chrono::{DateTime, TimeZone, Utc};

use readstats::InMemoryProgressRepository;
use readstats::domain::ids::{BookId, ProgressEventId, UserBookId, UserId};
use readstats::domain::reading::{CompletedBook, ProgressEvent};

pub const READER: UserId = UserId::new(1);

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Thu Jun 20, 2024, noon UTC — the fixed "now" shared by these tests.
pub fn now() -> DateTime<Utc> {
    utc(2024, 6, 20, 12, 0, 0)
}

pub fn progress_event(
    id: i64,
    book: i64,
    pages: i64,
    recorded_at: DateTime<Utc>,
) -> ProgressEvent {
    ProgressEvent {
        id: ProgressEventId::new(id),
        user_book_id: UserBookId::new(book),
        book_title: format!("Book {book}"),
        pages_read: pages,
        recorded_at,
    }
}

pub fn completed_book(id: i64, completed_at: DateTime<Utc>) -> CompletedBook {
    CompletedBook {
        id: BookId::new(id),
        title: format!("Finished {id}"),
        cover: None,
        completed_at,
    }
}

/// Repository pre-loaded with the given history for [`READER`].
pub fn seeded_repository(
    events: Vec<ProgressEvent>,
    completed: Vec<CompletedBook>,
) -> InMemoryProgressRepository {
    let repo = InMemoryProgressRepository::new();
    for event in events {
        repo.insert_event(READER, event);
    }
    for book in completed {
        repo.insert_completed(READER, book);
    }
    repo
}
