//! Command-line parsing for the `fx` binary.
//!
//! Argument parsing lives here; everything it feeds is built in `app`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

pub const DEFAULT_QUERY: &str = "CNY to TWD";

/// Exchange rate history query tool.
#[derive(Debug, Parser, Clone)]
#[command(name = "fx", version, about = "Exchange rate history and trend from the Bank of Taiwan rate page")]
pub struct Cli {
    /// Query: 'CUR1 to CUR2 [last N months|years]' or 'CUR1 to CUR2 YYYY-MM-DD~YYYY-MM-DD'.
    #[arg(default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Source page URL (overrides FX_SOURCE_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Reference date for relative ranges (defaults to today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Number of most recent entries shown in the report.
    #[arg(long, default_value_t = 10)]
    pub tail: usize,

    /// Sort the series by date before computing current rate and trend.
    #[arg(long)]
    pub sort_by_date: bool,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Write the full result to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Write the extracted series to a CSV file.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Log pipeline diagnostics (repeat for row-level detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, crate::domain::DATE_FORMAT).map_err(|e| format!("invalid date '{s}': {e}"))
}
