#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! AI-generated market summaries as an injected capability.
//!
//! The [`Summarizer`] trait turns computed [`MarketStats`] into prose
//! via an OpenAI-compatible chat-completions service (Groq by default).
//! Callers treat the capability as optional: any [`AiError`] degrades
//! to the deterministic [`fallback_summary`] text, never to a
//! user-facing failure.

mod chat;

pub use chat::ChatCompletionSummarizer;

use estate_insights_analytics_models::MarketStats;
use thiserror::Error;

/// Default chat model requested from the upstream service.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Errors that can occur while generating an AI summary.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the upstream service failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream service returned an error response.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// The capability is not configured (missing API key).
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// Capability that turns market statistics into a prose summary.
///
/// Injected into the HTTP layer so handlers are testable without
/// network access.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Generates a professional market analysis from the given stats.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] when the upstream call fails; callers
    /// recover with [`fallback_summary`].
    async fn market_summary(&self, stats: &MarketStats) -> Result<String, AiError>;
}

/// Deterministic local text substituted when the upstream call fails.
#[must_use]
pub fn fallback_summary(stats: &MarketStats) -> String {
    format!(
        "AI summary unavailable. Basic analysis: {} shows {} trends with {:+.1}% price change.",
        stats.area, stats.price_trend, stats.price_change
    )
}
