#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for locality real-estate analysis.
//!
//! Serves the REST API answering free-text queries about historical
//! transaction data: single-locality analysis, a locality catalog,
//! side-by-side comparison, CSV export, and on-demand AI market
//! summaries. Each request re-reads the backing file; the only shared
//! state is the immutable configuration and the injected summarizer.

pub mod config;
pub mod handlers;

mod export;

use std::sync::Arc;

use actix_web::{web, Scope};
use estate_insights_ai::Summarizer;

use crate::config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// Process configuration, built once at startup.
    pub config: ServerConfig,
    /// AI summary capability.
    pub summarizer: Arc<dyn Summarizer>,
}

/// Builds the `/api` scope with every route registered.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .route("/analyze", web::post().to(handlers::analyze))
        .route("/areas", web::get().to(handlers::areas))
        .route("/compare", web::post().to(handlers::compare))
        .route("/download", web::post().to(handlers::download))
        .route("/generate-summary", web::post().to(handlers::generate_summary))
        .route("/health", web::get().to(handlers::health))
}
