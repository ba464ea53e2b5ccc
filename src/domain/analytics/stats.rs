use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::analytics::activity::{
    BookRef, DailyActivity, DailyBookActivity, build_activity_window,
};
use crate::domain::analytics::calendar::{WeekStart, civil_day, start_of_week};
use crate::domain::analytics::streaks::compute_streaks;
use crate::domain::errors::StatsError;
use crate::domain::ids::UserBookId;
use crate::domain::reading::{CompletedBook, ProgressEvent};

/// Days covered by the daily-activity series when the caller does not ask
/// for a different window.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// "This month" is a rolling lookback, not a calendar month.
const MONTH_LOOKBACK_DAYS: i64 = 30;

/// Caller preferences for a stats computation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StatsOptions {
    /// Zone anchoring civil-day boundaries; `None` means UTC.
    pub timezone: Option<Tz>,
    pub week_start: WeekStart,
    pub window_days: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            timezone: None,
            week_start: WeekStart::default(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl StatsOptions {
    /// Set the zone from an IANA name such as `"America/New_York"`.
    pub fn with_timezone_name(mut self, name: &str) -> Result<Self, StatsError> {
        let tz =
            Tz::from_str(name).map_err(|_| StatsError::UnknownTimeZone(name.to_string()))?;
        self.timezone = Some(tz);
        Ok(self)
    }

    /// Set the week-start convention from its lowercase name.
    pub fn with_week_start_name(mut self, name: &str) -> Result<Self, StatsError> {
        self.week_start = name
            .parse()
            .map_err(|()| StatsError::UnknownWeekStart(name.to_string()))?;
        Ok(self)
    }
}

/// Complete statistics snapshot derived from a user's reading history.
///
/// Recomputed fresh on every call and safe to serialize directly: dates
/// become `YYYY-MM-DD` strings and book ids become string map keys.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub total_pages_read: i64,
    pub total_books_completed: u64,
    pub pages_this_week: i64,
    pub pages_this_month: i64,
    pub daily_activity: Vec<DailyActivity>,
    pub daily_activity_by_book: Vec<DailyBookActivity>,
    pub book_metadata: BTreeMap<UserBookId, BookRef>,
    pub reading_days: Vec<NaiveDate>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub computed_at: String,
}

/// Derive a full statistics snapshot from raw progress events and
/// completed-book records, relative to the supplied instant.
///
/// Pure and allocation-fresh: identical inputs and `now` produce identical
/// output, and the input collections are never mutated.
pub fn compute_derived_stats(
    events: &[ProgressEvent],
    completed: &[CompletedBook],
    now: DateTime<Utc>,
    options: &StatsOptions,
) -> DerivedStats {
    let tz = options.timezone;
    let window = build_activity_window(events, options.window_days, now, tz);

    let week_cutoff = start_of_week(now, options.week_start, tz);
    let month_cutoff = now - Duration::days(MONTH_LOOKBACK_DAYS);

    let mut total_pages_read = 0;
    let mut pages_this_week = 0;
    let mut pages_this_month = 0;
    for event in events {
        let pages = event.pages_read.max(0);
        total_pages_read += pages;
        if event.recorded_at >= week_cutoff {
            pages_this_week += pages;
        }
        if event.recorded_at >= month_cutoff {
            pages_this_month += pages;
        }
    }

    let streaks = compute_streaks(&window.reading_days, civil_day(now, tz));

    DerivedStats {
        total_pages_read,
        total_books_completed: completed.len() as u64,
        pages_this_week,
        pages_this_month,
        daily_activity: window.daily,
        daily_activity_by_book: window.daily_by_book,
        book_metadata: window.book_metadata,
        reading_days: window.reading_days,
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        computed_at: now.to_rfc3339(),
    }
}
