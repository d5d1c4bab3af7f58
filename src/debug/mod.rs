//! Structured diagnostics for the query pipeline.
//!
//! Core code never writes to the console or calls the `log` macros itself.
//! It is handed a `&dyn Diagnostics` and emits `DiagEvent`s; the binary plugs
//! in `LogDiagnostics`, tests plug in `RecordingDiagnostics` and inspect what
//! was emitted.

use std::cell::RefCell;

use log::Level;

/// Why a table row did not make it into the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewCells { found: usize },
    OutOfRange,
    EmptyRate,
    InvalidRate { text: String },
    NonPositiveRate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewCells { found } => write!(f, "expected at least 3 cells, found {found}"),
            SkipReason::OutOfRange => f.write_str("date outside requested range"),
            SkipReason::EmptyRate => f.write_str("no numeric characters in rate cell"),
            SkipReason::InvalidRate { text } => write!(f, "rate '{text}' is not a number"),
            SkipReason::NonPositiveRate => f.write_str("rate is not positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagEvent {
    RangeResolved { start: String, end: String },
    Fetching { url: String },
    /// The styled rate table was missing and the first table on the page was used.
    TableFallback,
    RowsFound { count: usize },
    RowAccepted { index: usize, date: String, rate: f64 },
    RowSkipped { index: usize, reason: SkipReason },
    SourceFailed { message: String },
}

impl DiagEvent {
    pub fn level(&self) -> Level {
        match self {
            DiagEvent::TableFallback | DiagEvent::SourceFailed { .. } => Level::Warn,
            DiagEvent::RangeResolved { .. } | DiagEvent::Fetching { .. } | DiagEvent::RowsFound { .. } => {
                Level::Info
            }
            DiagEvent::RowAccepted { .. } => Level::Trace,
            DiagEvent::RowSkipped { .. } => Level::Debug,
        }
    }
}

impl std::fmt::Display for DiagEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagEvent::RangeResolved { start, end } => write!(f, "date range: {start} to {end}"),
            DiagEvent::Fetching { url } => write!(f, "fetching | url: {url}"),
            DiagEvent::TableFallback => f.write_str("styled rate table missing, using first table on page"),
            DiagEvent::RowsFound { count } => write!(f, "found {count} rows in the table"),
            DiagEvent::RowAccepted { index, date, rate } => {
                write!(f, "row {index} | date: {date} | rate: {rate}")
            }
            DiagEvent::RowSkipped { index, reason } => write!(f, "row {index} skipped | {reason}"),
            DiagEvent::SourceFailed { message } => write!(f, "source failed | {message}"),
        }
    }
}

/// Sink for pipeline diagnostics.
pub trait Diagnostics {
    fn record(&self, event: DiagEvent);
}

/// Forwards events to the `log` facade under the `fx_trend` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&self, event: DiagEvent) {
        log::log!(target: "fx_trend", event.level(), "{event}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn record(&self, _event: DiagEvent) {}
}

/// Keeps events in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: RefCell<Vec<DiagEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagEvent> {
        self.events.borrow().clone()
    }

    pub fn skipped(&self) -> Vec<(usize, SkipReason)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DiagEvent::RowSkipped { index, reason } => Some((*index, reason.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, event: DiagEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let diag = RecordingDiagnostics::new();
        diag.record(DiagEvent::RowsFound { count: 2 });
        diag.record(DiagEvent::RowSkipped {
            index: 1,
            reason: SkipReason::EmptyRate,
        });
        let events = diag.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DiagEvent::RowsFound { count: 2 });
        assert_eq!(diag.skipped(), vec![(1, SkipReason::EmptyRate)]);
    }

    #[test]
    fn row_events_are_below_info() {
        let skipped = DiagEvent::RowSkipped {
            index: 0,
            reason: SkipReason::OutOfRange,
        };
        assert!(skipped.level() > Level::Info);
        assert_eq!(DiagEvent::TableFallback.level(), Level::Warn);
    }
}
