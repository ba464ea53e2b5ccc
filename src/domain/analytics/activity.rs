use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::analytics::calendar::civil_day;
use crate::domain::ids::UserBookId;
use crate::domain::reading::ProgressEvent;

/// Pages read on a single civil day, all books combined.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub pages: i64,
}

/// Pages read on a single civil day, split by book.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DailyBookActivity {
    pub date: NaiveDate,
    pub pages: i64,
    /// One entry per book in the full event history, zero-filled on days the
    /// book saw no activity.
    pub by_book: BTreeMap<UserBookId, i64>,
}

/// Title reference for a book appearing anywhere in the event history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookRef {
    pub id: UserBookId,
    pub title: String,
}

/// Daily activity series plus the history-wide context they were built from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ActivityWindow {
    /// Exactly the requested number of days, oldest first, ending at today.
    pub daily: Vec<DailyActivity>,
    /// Same date range as `daily`, partitioned by book.
    pub daily_by_book: Vec<DailyBookActivity>,
    /// Every book referenced anywhere in history, not just the window.
    pub book_metadata: BTreeMap<UserBookId, BookRef>,
    /// Distinct civil days with at least one page read, over all history,
    /// sorted ascending.
    pub reading_days: Vec<NaiveDate>,
}

/// Buckets the full event history into civil days and materializes a
/// contiguous window of `window_days` entries ending at the day `now` falls
/// on in the given zone.
///
/// The input is read-only and may arrive in any order. Events with a
/// negative page delta are treated as contributing zero pages.
pub fn build_activity_window(
    events: &[ProgressEvent],
    window_days: usize,
    now: DateTime<Utc>,
    tz: Option<Tz>,
) -> ActivityWindow {
    let today = civil_day(now, tz);

    let mut day_totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut book_day_totals: BTreeMap<NaiveDate, BTreeMap<UserBookId, i64>> = BTreeMap::new();
    let mut latest_titles: BTreeMap<UserBookId, (DateTime<Utc>, String)> = BTreeMap::new();
    let mut reading_days: BTreeSet<NaiveDate> = BTreeSet::new();

    for event in events {
        let day = civil_day(event.recorded_at, tz);
        let pages = event.pages_read.max(0);

        *day_totals.entry(day).or_default() += pages;
        *book_day_totals
            .entry(day)
            .or_default()
            .entry(event.user_book_id)
            .or_default() += pages;

        if pages > 0 {
            reading_days.insert(day);
        }

        match latest_titles.entry(event.user_book_id) {
            Entry::Vacant(vacant) => {
                vacant.insert((event.recorded_at, event.book_title.clone()));
            }
            Entry::Occupied(mut occupied) => {
                if event.recorded_at > occupied.get().0 {
                    occupied.insert((event.recorded_at, event.book_title.clone()));
                }
            }
        }
    }

    let book_ids: Vec<UserBookId> = latest_titles.keys().copied().collect();

    let mut daily = Vec::with_capacity(window_days);
    let mut daily_by_book = Vec::with_capacity(window_days);
    for offset in (0..window_days).rev() {
        let date = today - Duration::days(offset as i64);
        let pages = day_totals.get(&date).copied().unwrap_or(0);

        let mut by_book: BTreeMap<UserBookId, i64> =
            book_ids.iter().map(|id| (*id, 0)).collect();
        if let Some(per_book) = book_day_totals.get(&date) {
            for (id, sum) in per_book {
                by_book.insert(*id, *sum);
            }
        }

        daily.push(DailyActivity { date, pages });
        daily_by_book.push(DailyBookActivity { date, pages, by_book });
    }

    let book_metadata = latest_titles
        .into_iter()
        .map(|(id, (_, title))| (id, BookRef { id, title }))
        .collect();

    ActivityWindow {
        daily,
        daily_by_book,
        book_metadata,
        reading_days: reading_days.into_iter().collect(),
    }
}
