//! Date phrase resolution.
//!
//! Recognized forms, tried in this order (first match wins):
//!
//! 1. `last N month(s)` / `last N year(s)`, case-insensitive. Months are 30
//!    days and years 365 days; this is a deliberate approximation.
//! 2. `YYYY-MM-DD~YYYY-MM-DD`, returned verbatim without calendar checks.
//! 3. Anything else: the 30 days ending at `now`.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::domain::DateRange;

pub const DAYS_PER_MONTH: u64 = 30;
pub const DAYS_PER_YEAR: u64 = 365;
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

static RELATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)last\s+([0-9]+)\s+(month|year)s?").expect("relative range pattern"));

static EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})~([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("explicit range pattern")
});

/// Resolve the date window for `query` relative to `now`. Never fails.
pub fn resolve_date_range(query: &str, now: NaiveDate) -> DateRange {
    if let Some(days) = relative_window_days(query) {
        return DateRange::from_dates(days_before(now, days), now);
    }

    if let Some(caps) = EXPLICIT.captures(query) {
        return DateRange::new(&caps[1], &caps[2]);
    }

    DateRange::from_dates(days_before(now, DEFAULT_WINDOW_DAYS), now)
}

/// Length in days of a `last N months|years` phrase, if the query has one.
///
/// Counts too large to represent saturate instead of failing.
fn relative_window_days(query: &str) -> Option<u64> {
    let caps = RELATIVE.captures(query)?;
    let count = caps[1].parse::<u64>().unwrap_or(u64::MAX);
    let per_unit = if caps[2].eq_ignore_ascii_case("month") {
        DAYS_PER_MONTH
    } else {
        DAYS_PER_YEAR
    };
    Some(count.saturating_mul(per_unit))
}

fn days_before(now: NaiveDate, days: u64) -> NaiveDate {
    now.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
