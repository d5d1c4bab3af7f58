//! Terminal output for a finished query.
//!
//! Rates are always shown with four decimals. Only the tail of the series is
//! printed; exports carry the full history.

use crate::app::pipeline::QueryRun;
use crate::domain::{RatePoint, RateReport};

/// Format a run as the text report, or `Error: <message>` on failure.
pub fn format_run(run: &QueryRun, tail: usize) -> String {
    match &run.result {
        Ok(report) => format_report(run, report, tail),
        Err(failure) => format!("Error: {failure}\n"),
    }
}

fn format_report(run: &QueryRun, report: &RateReport, tail: usize) -> String {
    let mut out = String::new();
    let stats = &report.statistics;

    out.push_str("\n=== Exchange Rate Information ===\n");
    if let Some(pair) = &run.pair {
        out.push_str(&format!("Requested: {pair} (source series: CNY/TWD)\n"));
    }
    out.push_str(&format!("Current Rate: {:.4}\n", report.current_rate));

    out.push_str("\nStatistics:\n");
    out.push_str(&format!("Average Rate: {:.4}\n", stats.average_rate));
    out.push_str(&format!("Minimum Rate: {:.4}\n", stats.min_rate));
    out.push_str(&format!("Maximum Rate: {:.4}\n", stats.max_rate));
    out.push_str(&format!("Trend: {}\n", stats.trend));
    out.push_str(&format!("Period: {}\n", stats.period));

    out.push_str(&format!("\nHistorical Data (last {tail} entries):\n"));
    for point in tail_of(&report.historical_data, tail) {
        out.push_str(&format!("Date: {}, Rate: {:.4}\n", point.date, point.rate));
    }

    out
}

fn tail_of(series: &[RatePoint], n: usize) -> &[RatePoint] {
    &series[series.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyPair, Period, QueryFailure, Statistics, Trend};

    fn run_with(points: Vec<RatePoint>) -> QueryRun {
        let first = points.first().unwrap().date.clone();
        let last = points.last().unwrap().date.clone();
        QueryRun {
            query: "CNY to TWD".to_string(),
            pair: Some(CurrencyPair {
                from: "CNY".to_string(),
                to: "TWD".to_string(),
            }),
            range: None,
            result: Ok(RateReport {
                current_rate: points.last().unwrap().rate,
                statistics: Statistics {
                    average_rate: 4.375,
                    min_rate: 4.35,
                    max_rate: 4.4,
                    trend: Trend::Stable,
                    period: Period { first, last },
                },
                historical_data: points,
            }),
        }
    }

    fn day(i: usize) -> RatePoint {
        RatePoint {
            date: format!("2024-01-{:02}", i),
            rate: 4.0 + i as f64 / 100.0,
        }
    }

    #[test]
    fn report_uses_four_decimals() {
        let text = format_run(&run_with(vec![day(1), day(2)]), 10);
        assert!(text.contains("=== Exchange Rate Information ==="));
        assert!(text.contains("Current Rate: 4.0200\n"));
        assert!(text.contains("Average Rate: 4.3750\n"));
        assert!(text.contains("Trend: stable\n"));
        assert!(text.contains("Period: 2024-01-01 to 2024-01-02\n"));
        assert!(text.contains("Date: 2024-01-01, Rate: 4.0100\n"));
    }

    #[test]
    fn only_tail_is_printed() {
        let points: Vec<RatePoint> = (1..=15).map(day).collect();
        let text = format_run(&run_with(points), 10);
        assert!(!text.contains("Date: 2024-01-05,"));
        assert!(text.contains("Date: 2024-01-06,"));
        assert!(text.contains("Date: 2024-01-15,"));
        assert_eq!(text.matches("Date: ").count(), 10);
    }

    #[test]
    fn failure_is_single_line() {
        let run = QueryRun {
            query: "XYZ".to_string(),
            pair: None,
            range: None,
            result: Err(QueryFailure::table_not_found()),
        };
        assert_eq!(format_run(&run, 10), "Error: Could not find exchange rate table\n");
    }
}
