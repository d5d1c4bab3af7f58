//! Reporting: the text report and the JSON view of a query run.

use serde::Serialize;

use crate::app::pipeline::QueryRun;
use crate::domain::{CurrencyPair, DateRange, FailureKind, RatePoint, Statistics};

pub mod format;

pub use format::*;

/// Flat JSON shape of a run.
///
/// On failure `error` is set and the data fields are null/empty; on success
/// `error` is omitted.
#[derive(Debug, Serialize)]
pub struct RunView<'a> {
    pub query: &'a str,
    pub pair: Option<&'a CurrencyPair>,
    pub requested_range: Option<&'a DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
    pub current_rate: Option<f64>,
    pub statistics: Option<&'a Statistics>,
    pub historical_data: &'a [RatePoint],
}

impl<'a> RunView<'a> {
    pub fn new(run: &'a QueryRun) -> Self {
        let base = RunView {
            query: &run.query,
            pair: run.pair.as_ref(),
            requested_range: run.range.as_ref(),
            error: None,
            error_kind: None,
            current_rate: None,
            statistics: None,
            historical_data: &[],
        };
        match &run.result {
            Ok(report) => RunView {
                current_rate: Some(report.current_rate),
                statistics: Some(&report.statistics),
                historical_data: &report.historical_data,
                ..base
            },
            Err(failure) => RunView {
                error: Some(failure.message.as_str()),
                error_kind: Some(failure.kind),
                ..base
            },
        }
    }
}

pub fn to_json_string(run: &QueryRun) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RunView::new(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QueryFailure;

    #[test]
    fn failure_view_has_null_data() {
        let run = QueryRun {
            query: "CNY to TWD".to_string(),
            pair: None,
            range: None,
            result: Err(QueryFailure::empty_result()),
        };
        let value: serde_json::Value = serde_json::from_str(&to_json_string(&run).unwrap()).unwrap();
        assert_eq!(
            value["error"],
            "No exchange rate data available for the specified period"
        );
        assert_eq!(value["error_kind"], "empty_result");
        assert!(value["current_rate"].is_null());
        assert!(value["statistics"].is_null());
        assert_eq!(value["historical_data"], serde_json::json!([]));
    }
}
