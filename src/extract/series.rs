//! Row-by-row validation into `RatePoint`s.

use crate::debug::{DiagEvent, Diagnostics, SkipReason};
use crate::domain::{DateRange, QueryFailure, QueryResult, RatePoint, RawRow, SeriesOrder};
use crate::extract::stats::summarize;

const DATE_CELL: usize = 0;
const RATE_CELL: usize = 2;
const MIN_CELLS: usize = RATE_CELL + 1;

/// Extract the series for `range` from `rows` and summarize it.
///
/// Rows are kept in source order unless `order` asks for a date sort. The
/// current rate and trend read the first and last points, so `AsListed`
/// is only meaningful when the source lists rows oldest first.
pub fn extract_series(
    rows: &[RawRow],
    range: &DateRange,
    order: SeriesOrder,
    diag: &dyn Diagnostics,
) -> QueryResult {
    let mut series = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match parse_row(row, range) {
            Ok(point) => {
                diag.record(DiagEvent::RowAccepted {
                    index,
                    date: point.date.clone(),
                    rate: point.rate,
                });
                series.push(point);
            }
            Err(reason) => diag.record(DiagEvent::RowSkipped { index, reason }),
        }
    }

    if order == SeriesOrder::Chronological {
        series.sort_by(|a, b| a.date.cmp(&b.date));
    }

    summarize(series).ok_or_else(QueryFailure::empty_result)
}

/// Validate a single row against `range`.
pub fn parse_row(row: &[String], range: &DateRange) -> Result<RatePoint, SkipReason> {
    if row.len() < MIN_CELLS {
        return Err(SkipReason::TooFewCells { found: row.len() });
    }

    let date = normalize_date(&row[DATE_CELL]);
    if !range.contains(&date) {
        return Err(SkipReason::OutOfRange);
    }

    let text = clean_rate_text(&row[RATE_CELL]);
    if text.is_empty() {
        return Err(SkipReason::EmptyRate);
    }
    let rate = match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(SkipReason::InvalidRate { text }),
    };
    if rate <= 0.0 {
        return Err(SkipReason::NonPositiveRate);
    }

    Ok(RatePoint { date, rate })
}

/// `2024/01/02` -> `2024-01-02`.
pub fn normalize_date(cell: &str) -> String {
    cell.trim().replace('/', "-")
}

/// Keep only ASCII digits and dots. Repeated dots survive and fail parsing later.
pub fn clean_rate_text(cell: &str) -> String {
    cell.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}
