//! `fx-trend` library crate.
//!
//! The binary (`fx`) is a thin wrapper around this library so that:
//!
//! - date range resolution and series extraction are testable without the network
//! - the upstream page sits behind a trait and can be swapped in tests

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod query;
pub mod report;
