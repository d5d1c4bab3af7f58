//! The query pipeline shared by every front-end.
//!
//! query -> pair check -> date range -> fetch + tabularize -> extract -> result
//!
//! Every failure on the way comes back as a `QueryFailure` inside the
//! returned `QueryRun`; nothing here panics or returns early with an error.

use chrono::NaiveDate;

use crate::data::RateTableSource;
use crate::debug::{DiagEvent, Diagnostics};
use crate::domain::{CurrencyPair, DateRange, QueryResult, SeriesOrder};
use crate::extract::extract_series;
use crate::query::{parse_pair, resolve_date_range};

/// Everything known about one query after it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRun {
    pub query: String,
    /// `None` when the query was rejected before a pair could be read.
    pub pair: Option<CurrencyPair>,
    pub range: Option<DateRange>,
    pub result: QueryResult,
}

/// Run `query` against `source` with `now` as the reference date.
pub fn run_query(
    query: &str,
    now: NaiveDate,
    order: SeriesOrder,
    source: &dyn RateTableSource,
    diag: &dyn Diagnostics,
) -> QueryRun {
    let pair = match parse_pair(query) {
        Ok(pair) => pair,
        Err(failure) => {
            return QueryRun {
                query: query.to_string(),
                pair: None,
                range: None,
                result: Err(failure),
            };
        }
    };

    // The date phrase sits after the pair, so the whole query is searched.
    let range = resolve_date_range(query, now);
    diag.record(DiagEvent::RangeResolved {
        start: range.start.clone(),
        end: range.end.clone(),
    });

    let result = match source.fetch_rows(diag) {
        Ok(rows) => extract_series(&rows, &range, order, diag),
        Err(err) => {
            diag.record(DiagEvent::SourceFailed { message: err.to_string() });
            Err(err.into())
        }
    };

    QueryRun {
        query: query.to_string(),
        pair: Some(pair),
        range: Some(range),
        result,
    }
}
