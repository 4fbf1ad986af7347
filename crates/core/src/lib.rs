//! Domain logic for the DataViz backend.
//!
//! Pure functions over sensor reading datasets -- no HTTP, no async. The
//! `api` crate maps these results onto HTTP responses and the `cleaner`
//! binary drives the critical-reading filter from the command line.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod reading;

pub use error::CoreError;
pub use reading::Reading;
