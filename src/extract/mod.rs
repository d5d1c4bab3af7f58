//! Rate series extraction.
//!
//! Turns raw table rows into a validated series for one date window and
//! summarizes it. Row problems are never fatal: a bad row is reported to the
//! diagnostics sink and dropped, and only an empty series fails the query.

pub mod series;
pub mod stats;

pub use series::*;
pub use stats::*;
