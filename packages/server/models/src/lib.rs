#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the estate insights server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the dataset and analytics types to allow independent
//! evolution of the API contract.

use estate_insights_analytics_models::{ChartPoint, ComparisonOutcome, MarketStats, TableRow};
use serde::{Deserialize, Serialize};

/// Body of the query-driven endpoints (`/analyze`, `/compare`,
/// `/download`).
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Free-text user query naming one or more localities.
    #[serde(default)]
    pub query: String,
}

/// Response of the single-locality analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Resolved locality, canonical stored casing.
    pub area: String,
    /// Multi-section narrative summary.
    pub summary: String,
    /// Per-year chart series, ascending.
    pub chart_data: Vec<ChartPoint>,
    /// Display table rows, descending.
    pub table_data: Vec<TableRow>,
    /// The original query text.
    pub query: String,
    /// Number of records behind the analysis.
    pub record_count: usize,
    /// Year span as `start-end`.
    pub year_range: String,
}

/// Per-locality catalog entry of the areas endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDetail {
    /// Locality name.
    pub name: String,
    /// Year span as `start-end`.
    pub years: String,
    /// Number of records for this locality.
    pub records: usize,
    /// Average flat rate, formatted for display.
    pub avg_price: String,
}

/// Response of the areas catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreasResponse {
    /// All locality names, sorted alphabetically.
    pub areas: Vec<String>,
    /// Number of localities.
    pub count: usize,
    /// Per-locality catalog details.
    pub details: Vec<AreaDetail>,
}

/// Response of the comparison endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Localities that resolved from the query.
    pub areas: Vec<String>,
    /// Per-locality figures or explicit no-data entries.
    pub comparison: Vec<ComparisonOutcome>,
    /// The original query text.
    pub query: String,
}

/// Body of the on-demand AI summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSummaryRequest {
    /// Locality the statistics describe.
    #[serde(default)]
    pub area: String,
    /// Previously computed statistics to summarize.
    #[serde(default)]
    pub data: MarketStats,
}

/// Response of the on-demand AI summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryResponse {
    /// The generated (or fallback) summary text.
    pub ai_summary: String,
    /// Locality the summary describes.
    pub area: String,
    /// Server time the summary was generated.
    pub timestamp: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status string.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// Whether the backing file loaded successfully.
    pub dataset_loaded: bool,
    /// Records in the dataset (0 when unloadable).
    pub total_records: usize,
    /// Known locality names.
    pub areas: Vec<String>,
    /// Year span as `start-end`, or `N/A`.
    pub year_range: String,
    /// Server time of the check.
    pub timestamp: String,
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// What went wrong.
    pub error: String,
    /// Known localities, included when the query resolved nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_areas: Option<Vec<String>>,
    /// Example query hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ApiError {
    /// Plain error with no hints.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            available_areas: None,
            suggestion: None,
        }
    }

    /// Error carrying the valid-locality hint list and an example
    /// query.
    #[must_use]
    pub fn with_hints(error: impl Into<String>, areas: Vec<String>) -> Self {
        let suggestion = areas
            .first()
            .map(|area| format!("Try asking: \"Analyze {area}\""));
        Self {
            error: error.into(),
            available_areas: Some(areas),
            suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_omits_hint_fields() {
        let json = serde_json::to_value(ApiError::new("boom")).unwrap();
        assert_eq!(json["error"], "boom");
        assert!(json.get("availableAreas").is_none());
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn hinted_error_suggests_the_first_area() {
        let err = ApiError::with_hints("no match", vec!["Wakad".to_string()]);
        assert_eq!(
            err.suggestion.as_deref(),
            Some("Try asking: \"Analyze Wakad\"")
        );
    }

    #[test]
    fn query_request_defaults_to_empty() {
        let req: QueryRequest = serde_json::from_str("{}").unwrap();
        assert!(req.query.is_empty());
    }
}
