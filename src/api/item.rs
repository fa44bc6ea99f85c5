//! Item Endpoints
//!
//! List, create and resolve items of the configured resource.

use crate::config::WidgetConfig;
use crate::models::{Item, NewItem, ResolveRequest};
use super::{endpoint, get_json, post_form, resource_url, ApiError};

/// Query for the unresolved items of a dataset, newest first
pub fn unresolved_query(dataset: &str) -> [(&'static str, &str); 2] {
    [("resolved", "0"), ("package", dataset)]
}

/// Query for the single most recently created item of a dataset
pub fn latest_query(dataset: &str) -> [(&'static str, &str); 2] {
    [("package", dataset), ("limit", "1")]
}

pub async fn list_unresolved(config: &WidgetConfig) -> Result<Vec<Item>, ApiError> {
    let url = endpoint(config, "", &unresolved_query(&config.dataset));
    get_json(&url).await
}

pub async fn fetch_latest(config: &WidgetConfig) -> Result<Option<Item>, ApiError> {
    let url = endpoint(config, "", &latest_query(&config.dataset));
    let items: Vec<Item> = get_json(&url).await?;
    Ok(items.into_iter().next())
}

/// Create an item.
///
/// Newer hosts answer with the created item; older ones return `{}`, in which
/// case `None` is returned and the caller has to look the item up.
pub async fn create_item(config: &WidgetConfig, new_item: &NewItem) -> Result<Option<Item>, ApiError> {
    let response = post_form(&resource_url(config), &new_item.form_fields()).await?;
    let body = response.text().await.unwrap_or_default();
    Ok(created_from_body(&body))
}

/// The created item, when the create response carries one
pub fn created_from_body(body: &str) -> Option<Item> {
    serde_json::from_str(body).ok()
}

pub async fn resolve_item(config: &WidgetConfig, request: &ResolveRequest) -> Result<(), ApiError> {
    let url = endpoint(config, "resolve", &[]);
    post_form(&url, &request.form_fields(config.resource.id_key())).await?;
    Ok(())
}
