//! Upstream rate data.
//!
//! - `source`: the `RateTableSource` seam and its error type
//! - `bot`: blocking HTTP fetch of the published rate page
//! - `table`: locate the rate table in the page and return its rows

pub mod bot;
pub mod source;
pub mod table;

pub use bot::*;
pub use source::*;
pub use table::*;
