//! Query interpretation: which pair was asked for and which dates to keep.
//!
//! - `pair`: split `"<CUR1> to <CUR2> ..."` into a `CurrencyPair`
//! - `range`: resolve the date phrase into a concrete `DateRange`

pub mod pair;
pub mod range;

pub use pair::*;
pub use range::*;
