//! Process configuration.
//!
//! All environment access happens here, once, at startup. Components
//! receive the resulting value object through app state and never
//! consult the environment themselves.

use std::path::PathBuf;

use estate_insights_ai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use estate_insights_analytics_models::{AggregateOptions, RateAveraging};

/// Upstream summary-service settings.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the chat-completions service; absent means the
    /// capability degrades to the local fallback text.
    pub api_key: Option<String>,
    /// Chat model to request.
    pub model: String,
    /// OpenAI-compatible API root.
    pub base_url: String,
}

/// Full server configuration, built once in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
    /// Path of the backing CSV file.
    pub dataset_path: PathBuf,
    /// Allowed CORS origins; empty means permissive.
    pub cors_allowed_origins: Vec<String>,
    /// Metric aggregation options.
    pub aggregation: AggregateOptions,
    /// Summary-service settings.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rate_averaging = lookup("RATE_AVERAGING")
            .map(|raw| {
                raw.parse::<RateAveraging>().unwrap_or_else(|_| {
                    log::warn!(
                        "Unrecognized RATE_AVERAGING value '{raw}'; using {}",
                        RateAveraging::default()
                    );
                    RateAveraging::default()
                })
            })
            .unwrap_or_default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            dataset_path: lookup("DATASET_PATH")
                .map_or_else(|| PathBuf::from("data/realestate_data.csv"), PathBuf::from),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            aggregation: AggregateOptions { rate_averaging },
            ai: AiConfig {
                api_key: lookup("GROQ_API_KEY").filter(|key| !key.is_empty()),
                model: lookup("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: lookup("AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
        }
    }
}
