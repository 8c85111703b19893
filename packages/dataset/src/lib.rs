#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loader for the transaction dataset.
//!
//! Reads the configured source file into a [`Dataset`], normalizing the
//! source's header spellings to the canonical schema and coercing dirty
//! numeric cells instead of failing the load. The file is re-read on
//! every request; there is no cache and no write path.

mod columns;
mod loader;
mod parsing;

pub use columns::Column;
pub use loader::{load, load_from_reader};

use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The backing file is missing or cannot be opened.
    #[error("source file unavailable at {path}: {source}")]
    SourceUnavailable {
        /// Path that was attempted.
        path: String,
        /// Underlying io failure.
        #[source]
        source: std::io::Error,
    },

    /// The source table's structure cannot be read at all (e.g. no
    /// header row). Individual malformed rows are skipped, not errors.
    #[error("malformed source table: {0}")]
    Malformed(#[from] csv::Error),
}
