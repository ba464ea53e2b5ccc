use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::analytics::calendar::previous_civil_day;

/// Current and longest runs of consecutive reading days.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute streaks from the civil days on which any reading was recorded.
///
/// Input need not be sorted or deduplicated; both happen here. A streak is
/// "current" only if its most recent day is `today` or the day before it.
pub fn compute_streaks(reading_days: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = reading_days.iter().copied().collect();
    if days.is_empty() {
        return StreakSummary::default();
    }

    StreakSummary {
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&days),
    }
}

fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&most_recent) = days.iter().next_back() else {
        return 0;
    };
    if most_recent != today && most_recent != previous_civil_day(today) {
        return 0;
    }

    // Walk backwards from the most recent day; the set guarantees strict
    // descent, so the first day older than expected is a confirmed gap.
    let mut streak = 0;
    let mut expected = most_recent;
    for &day in days.iter().rev() {
        if day != expected {
            break;
        }
        streak += 1;
        expected = previous_civil_day(expected);
    }
    streak
}

fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev == previous_civil_day(day) => run + 1,
            _ => {
                best = best.max(run);
                1
            }
        };
        previous = Some(day);
    }

    best.max(run)
}
