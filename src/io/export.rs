//! Write a query run to disk.
//!
//! JSON carries the whole run (including failures); CSV carries only the
//! series and is skipped when the query failed.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::app::pipeline::QueryRun;
use crate::error::AppError;
use crate::report::RunView;

#[derive(Serialize)]
struct SeriesRow<'a> {
    date: &'a str,
    rate: String,
}

/// Write the run as pretty JSON.
pub fn write_run_json(path: &Path, run: &QueryRun) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, &RunView::new(run))
        .map_err(|e| AppError::config(format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

/// Write `date,rate` rows for a successful run. Returns whether anything was written.
pub fn write_series_csv(path: &Path, run: &QueryRun) -> Result<bool, AppError> {
    let Ok(report) = &run.result else {
        return Ok(false);
    };

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::config(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    for point in &report.historical_data {
        writer
            .serialize(SeriesRow {
                date: &point.date,
                rate: format!("{:.4}", point.rate),
            })
            .map_err(|e| AppError::config(format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::config(format!("Failed to flush export CSV: {e}")))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Period, QueryFailure, RatePoint, RateReport, Statistics, Trend};

    fn ok_run() -> QueryRun {
        QueryRun {
            query: "CNY to TWD".to_string(),
            pair: None,
            range: None,
            result: Ok(RateReport {
                current_rate: 4.4,
                statistics: Statistics {
                    average_rate: 4.375,
                    min_rate: 4.35,
                    max_rate: 4.4,
                    trend: Trend::Stable,
                    period: Period {
                        first: "2024-01-01".to_string(),
                        last: "2024-01-02".to_string(),
                    },
                },
                historical_data: vec![
                    RatePoint {
                        date: "2024-01-01".to_string(),
                        rate: 4.35,
                    },
                    RatePoint {
                        date: "2024-01-02".to_string(),
                        rate: 4.4,
                    },
                ],
            }),
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        assert!(write_series_csv(&path, &ok_run()).unwrap());
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "date,rate\n2024-01-01,4.3500\n2024-01-02,4.4000\n");
    }

    #[test]
    fn csv_skipped_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let run = QueryRun {
            result: Err(QueryFailure::empty_result()),
            ..ok_run()
        };
        assert!(!write_series_csv(&path, &run).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn json_round_trips_key_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        write_run_json(&path, &ok_run()).unwrap();
        let value: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(value["current_rate"], 4.4);
        assert_eq!(value["statistics"]["trend"], "stable");
        assert_eq!(value["statistics"]["period"], "2024-01-01 to 2024-01-02");
        assert!(value.get("error").is_none());
    }
}
