#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Locality-aware aggregation over the transaction dataset.
//!
//! Resolves locality names out of free-text queries, computes summary
//! metrics per locality, shapes chart and table series, and packages
//! side-by-side comparisons. Everything here is pure computation over an
//! in-memory snapshot: no io, no network, deterministic for the same
//! input.

pub mod compare;
pub mod fmt;
pub mod metrics;
pub mod resolve;
pub mod series;

/// Scaling divisor for compact display of large currency totals
/// (1 crore = 10,000,000 rupees).
pub const CRORE: f64 = 10_000_000.0;
