use chrono::Duration;

use readstats::domain::ids::UserBookId;
use readstats::{StatsOptions, compute_user_stats_at};

use crate::helpers::{READER, now, progress_event, seeded_repository, utc};

#[tokio::test]
async fn rolling_month_window_and_totals() {
    let repo = seeded_repository(
        vec![
            progress_event(1, 1, 50, now() - Duration::days(3)),
            progress_event(2, 1, 10, now() - Duration::days(40)),
        ],
        vec![],
    );

    let stats = compute_user_stats_at(&repo, READER, now(), &StatsOptions::default())
        .await
        .expect("stats computation should succeed");

    assert_eq!(stats.total_pages_read, 60);
    assert_eq!(stats.pages_this_month, 50);
    assert_eq!(stats.pages_this_week, 50);
}

#[tokio::test]
async fn zone_preference_shifts_reading_days_and_staleness() {
    // 02:00 UTC on Jun 20 is 22:00 EDT on Jun 19. By Jun 21 evening the
    // streak is stale in New York but still alive under UTC day boundaries.
    let repo = seeded_repository(
        vec![progress_event(1, 1, 30, utc(2024, 6, 20, 2, 0, 0))],
        vec![],
    );
    let later = utc(2024, 6, 21, 18, 0, 0);

    let under_utc = compute_user_stats_at(&repo, READER, later, &StatsOptions::default())
        .await
        .expect("stats computation should succeed");
    let options = StatsOptions::default()
        .with_timezone_name("America/New_York")
        .expect("known zone");
    let in_new_york = compute_user_stats_at(&repo, READER, later, &options)
        .await
        .expect("stats computation should succeed");

    assert_eq!(under_utc.current_streak, 1);
    assert_eq!(in_new_york.current_streak, 0);
    assert_eq!(in_new_york.longest_streak, 1);
}

#[tokio::test]
async fn per_book_series_zero_fills_books_outside_the_window() {
    let repo = seeded_repository(
        vec![
            progress_event(1, 1, 10, utc(2024, 6, 20, 8, 0, 0)),
            progress_event(2, 9, 40, utc(2023, 1, 1, 8, 0, 0)),
        ],
        vec![],
    );

    let stats = compute_user_stats_at(&repo, READER, now(), &StatsOptions::default())
        .await
        .expect("stats computation should succeed");

    assert_eq!(stats.book_metadata.len(), 2);
    for day in &stats.daily_activity_by_book {
        assert_eq!(day.by_book[&UserBookId::new(9)], 0);
        assert!(day.by_book.contains_key(&UserBookId::new(1)));
    }
    // The old book still contributes to all-time figures.
    assert_eq!(stats.total_pages_read, 50);
    assert_eq!(stats.reading_days.len(), 2);
}

#[tokio::test]
async fn snapshot_serializes_to_plain_json() {
    let repo = seeded_repository(
        vec![progress_event(1, 3, 12, utc(2024, 6, 20, 8, 0, 0))],
        vec![],
    );

    let stats = compute_user_stats_at(&repo, READER, now(), &StatsOptions::default())
        .await
        .expect("stats computation should succeed");

    let value = serde_json::to_value(&stats).expect("snapshot should serialize");
    assert_eq!(value["reading_days"][0], serde_json::json!("2024-06-20"));
    assert_eq!(value["book_metadata"]["3"]["title"], serde_json::json!("Book 3"));
    assert!(value["computed_at"].as_str().unwrap().starts_with("2024-06-20T12:00:00"));
}
