//! Summary statistics over an extracted series.

use crate::domain::{Period, RatePoint, RateReport, Statistics, Trend};

/// Build the report for a non-empty series; `None` when there is nothing to summarize.
pub fn summarize(series: Vec<RatePoint>) -> Option<RateReport> {
    let statistics = compute_statistics(&series)?;
    let current_rate = series.last()?.rate;
    Some(RateReport {
        current_rate,
        statistics,
        historical_data: series,
    })
}

pub fn compute_statistics(series: &[RatePoint]) -> Option<Statistics> {
    let first = series.first()?;
    let last = series.last()?;

    let n = series.len() as f64;
    let min_rate = series.iter().map(|p| p.rate).fold(f64::INFINITY, f64::min);
    let max_rate = series.iter().map(|p| p.rate).fold(f64::NEG_INFINITY, f64::max);
    // Summation rounding can land the mean a hair outside the extrema.
    let average_rate = (series.iter().map(|p| p.rate).sum::<f64>() / n).clamp(min_rate, max_rate);

    Some(Statistics {
        average_rate,
        min_rate,
        max_rate,
        trend: Trend::classify(first.rate, last.rate),
        period: Period {
            first: first.date.clone(),
            last: last.date.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(rates: &[f64]) -> Vec<RatePoint> {
        rates
            .iter()
            .enumerate()
            .map(|(i, r)| RatePoint {
                date: format!("2024-01-{:02}", i + 1),
                rate: *r,
            })
            .collect()
    }

    #[test]
    fn empty_series_has_no_report() {
        assert!(summarize(Vec::new()).is_none());
    }

    #[test]
    fn single_point_is_stable() {
        let report = summarize(points(&[4.2])).unwrap();
        assert_eq!(report.current_rate, 4.2);
        assert_eq!(report.statistics.average_rate, 4.2);
        assert_eq!(report.statistics.trend, Trend::Stable);
        assert_eq!(report.statistics.period.to_string(), "2024-01-01 to 2024-01-01");
    }

    #[test]
    fn extrema_and_mean() {
        let stats = compute_statistics(&points(&[4.0, 4.6, 4.2, 4.4])).unwrap();
        assert_eq!(stats.min_rate, 4.0);
        assert_eq!(stats.max_rate, 4.6);
        assert!((stats.average_rate - 4.3).abs() < 1e-12);
        assert_eq!(stats.trend, Trend::Up);
    }

    #[test]
    fn mean_of_identical_values_stays_inside_extrema() {
        let stats = compute_statistics(&points(&[0.1, 0.1, 0.1])).unwrap();
        assert!(stats.average_rate <= stats.max_rate);
        assert!(stats.average_rate >= stats.min_rate);
    }

    proptest! {
        #[test]
        fn mean_is_bounded_by_extrema(rates in prop::collection::vec(0.0001f64..1.0e6, 1..60)) {
            let stats = compute_statistics(&points(&rates)).unwrap();
            prop_assert!(stats.min_rate <= stats.average_rate);
            prop_assert!(stats.average_rate <= stats.max_rate);
        }
    }
}
