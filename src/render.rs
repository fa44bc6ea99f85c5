//! Presentation Rules
//!
//! Text shown by the widget, kept apart from the components so the rules can
//! be checked without a DOM.

use crate::api::ApiError;
use crate::config::{Labels, WidgetConfig};
use crate::models::Item;

/// Badge text for the number of pending items
pub fn badge_text(count: usize, labels: &Labels) -> String {
    if count == 0 {
        labels.badge_empty.clone()
    } else {
        count.to_string()
    }
}

/// Labelled fields of one item row, in display order
pub fn item_fields(item: &Item) -> [(&'static str, &str); 4] {
    [
        ("Category", item.category.as_str()),
        ("Description", item.description.as_str()),
        ("Creator", item.creator.as_str()),
        ("Creation Date", item.created.as_str()),
    ]
}

pub fn empty_list_text(labels: &Labels) -> String {
    format!("No {} items for this package.", labels.noun)
}

/// Label of the add button and whether it can be clicked
pub fn add_button(config: &WidgetConfig) -> (String, bool) {
    if config.is_logged_in() {
        (format!("Add a {}", config.labels.noun), true)
    } else {
        (format!("Login to add {} items", config.labels.noun), false)
    }
}

pub const RESOLVE_LABEL: &str = "Mark as resolved";

pub fn load_error_text(err: &ApiError, labels: &Labels) -> String {
    format!(
        "Error: Could not get {} items for this package, please try again later (Error {}).",
        labels.heading,
        err.status()
    )
}

/// Create failures show the server's own message when it sent one
pub fn create_error_text(err: &ApiError, labels: &Labels) -> String {
    match err.server_message() {
        Some(msg) => format!("Error: {}", msg),
        None => format!(
            "Error: Could not add the {} item, please try again later (Error {}).",
            labels.noun,
            err.status()
        ),
    }
}

pub fn resolve_error_text(err: &ApiError, labels: &Labels) -> String {
    format!(
        "Error: Could not resolve the {} item, please try again later (Error {}).",
        labels.noun,
        err.status()
    )
}
