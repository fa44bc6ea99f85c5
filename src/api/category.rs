//! Category Endpoints
//!
//! Suggestions for the category input.

use crate::config::WidgetConfig;
use super::{endpoint, get_json, ApiError};

/// The host returns at most this many names
pub const SUGGESTION_LIMIT: usize = 10;

/// Category names matching what the user typed so far
pub async fn category_suggestions(config: &WidgetConfig, term: &str) -> Result<Vec<String>, ApiError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }
    let url = endpoint(config, "autocomplete", &[("term", term)]);
    let mut names: Vec<String> = get_json(&url).await?;
    names.truncate(SUGGESTION_LIMIT);
    Ok(names)
}
