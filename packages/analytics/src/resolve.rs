//! Extracts known locality names from free-text queries.
//!
//! Matching is a case-insensitive substring test: a locality matches if
//! its lower-cased name appears anywhere in the lower-cased query. No
//! stemming, no fuzzy matching; the dataset's locality list is the
//! whole vocabulary.

use estate_insights_dataset_models::Dataset;

/// Resolves the single best locality mentioned in `query`.
///
/// When several known localities are substrings of the query, the
/// longest name wins, so a query naming "Wakad Annexe" is not
/// short-circuited to "Wakad". Equal-length ties fall back to the
/// dataset's locality enumeration order. Returns the canonical stored
/// casing.
#[must_use]
pub fn resolve_one<'a>(query: &str, dataset: &'a Dataset) -> Option<&'a str> {
    let query_lower = query.to_lowercase();
    let mut best: Option<&str> = None;

    for name in dataset.localities() {
        if query_lower.contains(&name.to_lowercase())
            && best.is_none_or(|current| name.len() > current.len())
        {
            best = Some(name);
        }
    }

    best
}

/// Resolves every locality mentioned in `query`, in the dataset's
/// locality enumeration order (not query order).
#[must_use]
pub fn resolve_many<'a>(query: &str, dataset: &'a Dataset) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();
    dataset
        .localities()
        .iter()
        .filter(|name| query_lower.contains(&name.to_lowercase()))
        .map(String::as_str)
        .collect()
}
