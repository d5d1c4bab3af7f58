//! Domain types used throughout the query pipeline.
//!
//! This module defines:
//!
//! - the resolved date window (`DateRange`) and raw table rows (`RawRow`)
//! - validated series points and their summary (`RatePoint`, `Statistics`, `Trend`)
//! - the two-sided query outcome (`RateReport` / `QueryFailure`)
//! - per-run settings (`RunConfig`)

pub mod types;

pub use types::*;
