//! Result exports.
//!
//! - full run as JSON (`write_run_json`)
//! - the extracted series as CSV (`write_series_csv`)

pub mod export;

pub use export::*;
