use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// First day of the week for weekly rollups.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            WeekStart::Monday => "Monday",
            WeekStart::Sunday => "Sunday",
        }
    }

    /// Days elapsed since the start of the week for the given weekday (0–6).
    pub fn offset_from_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
        }
    }
}

impl FromStr for WeekStart {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(()),
        }
    }
}

/// Civil day the instant falls on in the given zone.
///
/// With no zone, the UTC calendar day is used — never the machine's local
/// zone, so results are identical across deployment environments. Two
/// instants on the same civil day in the zone always map to the same date,
/// including across DST transitions.
pub fn civil_day(instant: DateTime<Utc>, tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => instant.with_timezone(&tz).date_naive(),
        None => instant.date_naive(),
    }
}

/// Civil day immediately preceding `day`.
///
/// Pure calendar arithmetic on the date itself, so the result holds in every
/// zone and cannot be skewed by DST offsets.
pub fn previous_civil_day(day: NaiveDate) -> NaiveDate {
    day.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Instant at which the civil day begins in the given zone.
///
/// Zones whose DST transition starts at midnight have days with no 00:00 on
/// the wall clock; the earliest hour that does exist is used for those.
pub fn civil_midnight(day: NaiveDate, tz: Option<Tz>) -> DateTime<Utc> {
    let Some(tz) = tz else {
        return Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
    };

    for hour in 0..24 {
        let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
            continue;
        };
        if let Some(local) = tz.from_local_datetime(&day.and_time(time)).earliest() {
            return local.with_timezone(&Utc);
        }
    }

    // No zone skips an entire day; keep a deterministic reading regardless.
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

/// Instant marking the start of the current week: civil midnight of the most
/// recent week-start day at or before `now`.
pub fn start_of_week(now: DateTime<Utc>, week_start: WeekStart, tz: Option<Tz>) -> DateTime<Utc> {
    let (today, weekday) = match tz {
        Some(tz) => {
            let local = now.with_timezone(&tz);
            (local.date_naive(), local.weekday())
        }
        None => (now.date_naive(), now.weekday()),
    };

    let start_day = today - Duration::days(week_start.offset_from_start(weekday));
    civil_midnight(start_day, tz)
}
