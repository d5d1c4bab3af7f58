//! Shared domain types.
//!
//! Everything here is transient: built for one query, printed or exported,
//! then dropped. Dates are carried as `YYYY-MM-DD` text because range checks
//! compare them lexicographically, and explicit ranges typed by the user are
//! kept verbatim even when they are not real calendar dates.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Internal date format. Fixed-width and zero-padded so string order is date order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Relative move of the last rate against the first that still counts as `stable`.
pub const TREND_BAND: f64 = 0.02;

/// Inclusive `[start, end]` window, both ends as `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        )
    }

    /// Lexicographic containment check on normalized date text.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// One table row as cell texts, before any interpretation.
pub type RawRow = Vec<String>;

/// A validated daily rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    pub date: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Classify the move from `first` to `last` against the ±2% band.
    pub fn classify(first: f64, last: f64) -> Self {
        if last > first * (1.0 + TREND_BAND) {
            Trend::Up
        } else if last < first * (1.0 - TREND_BAND) {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dates actually covered by the retrieved series (may be narrower than requested).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub first: String,
    pub last: String,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.first, self.last)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub average_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub trend: Trend,
    pub period: Period,
}

/// Successful extraction: latest rate, summary statistics, and the series itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateReport {
    pub current_rate: f64,
    pub statistics: Statistics,
    pub historical_data: Vec<RatePoint>,
}

/// The pair named in the query.
///
/// Shown for transparency only: the upstream page always publishes the same
/// series whatever pair was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    QueryFormat,
    SourceUnavailable,
    TableNotFound,
    EmptyResult,
}

pub const QUERY_FORMAT_MESSAGE: &str = "Invalid query format. Use 'CURRENCY1 to CURRENCY2 [last X months/years]' or 'CURRENCY1 to CURRENCY2 YYYY-MM-DD~YYYY-MM-DD'";
pub const TABLE_NOT_FOUND_MESSAGE: &str = "Could not find exchange rate table";
pub const EMPTY_RESULT_MESSAGE: &str = "No exchange rate data available for the specified period";

/// A query that could not produce a report. Returned as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl QueryFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn query_format() -> Self {
        Self::new(FailureKind::QueryFormat, QUERY_FORMAT_MESSAGE)
    }

    pub fn table_not_found() -> Self {
        Self::new(FailureKind::TableNotFound, TABLE_NOT_FOUND_MESSAGE)
    }

    pub fn empty_result() -> Self {
        Self::new(FailureKind::EmptyResult, EMPTY_RESULT_MESSAGE)
    }
}

impl std::fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for QueryFailure {}

/// Outcome of one query: exactly one of report or failure.
pub type QueryResult = Result<RateReport, QueryFailure>;

/// Whether the series keeps the source's row order or is sorted by date first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrder {
    /// Trust the page to list rows oldest first.
    #[default]
    AsListed,
    /// Stable sort by date before taking first/last.
    Chronological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved settings for a single run of the binary.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub query: String,
    pub source_url: String,
    pub user_agent: String,
    pub as_of: NaiveDate,
    pub order: SeriesOrder,
    pub tail: usize,
    pub output: OutputFormat,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}
