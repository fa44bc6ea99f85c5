//! Widget Actions
//!
//! Fetch and mutate flows. Each one takes the widget context explicitly and
//! writes its outcome into the store.

use crate::api::{self, ApiError};
use crate::config::{Labels, WidgetConfig};
use crate::context::WidgetContext;
use crate::models::{Item, ItemId, NewItem, ResolveRequest};
use crate::render;
use crate::store::{
    store_apply_created, store_apply_loaded, store_apply_resolved, store_clear_error,
    store_set_error, WidgetStore,
};

/// Create payload for the current session; `None` for anonymous users.
///
/// Form values are passed through as typed, empty or not.
pub fn new_item(config: &WidgetConfig, category: String, description: String) -> Option<NewItem> {
    if !config.is_logged_in() {
        return None;
    }
    Some(NewItem {
        creator: config.user_id.clone(),
        package_name: config.dataset.clone(),
        category_name: category,
        description,
    })
}

/// Resolve payload for the current session; `None` for anonymous users
pub fn resolve_request(config: &WidgetConfig, id: ItemId) -> Option<ResolveRequest> {
    if !config.is_logged_in() {
        return None;
    }
    Some(ResolveRequest { item_id: id, resolver: config.user_id.clone() })
}

/// Where the row for an accepted create comes from
#[derive(Debug, Clone, PartialEq)]
pub enum CreatedItem {
    /// The create response carried the item
    Echoed(Item),
    /// Result of the follow-up `limit=1` read
    LookedUp(Result<Option<Item>, ApiError>),
}

/// Row to prepend and error to show after an accepted create
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub item: Option<Item>,
    pub error: Option<String>,
}

pub fn create_outcome(created: CreatedItem, labels: &Labels) -> CreateOutcome {
    match created {
        CreatedItem::Echoed(item) => CreateOutcome { item: Some(item), error: None },
        CreatedItem::LookedUp(Ok(item)) => CreateOutcome { item, error: None },
        CreatedItem::LookedUp(Err(err)) => {
            log::error!("[WIDGET] Could not fetch the created item: {}", err);
            CreateOutcome { item: None, error: Some(render::load_error_text(&err, labels)) }
        }
    }
}

/// The create went through, so the count rises even without a row
pub fn store_apply_create_outcome(store: &WidgetStore, outcome: CreateOutcome) {
    match outcome.error {
        Some(text) => store_set_error(store, text),
        None => store_clear_error(store),
    }
    store_apply_created(store, outcome.item);
}

/// Read the unresolved items of the dataset.
///
/// A failed read only fills the error panel; whatever was listed stays.
pub async fn load_items(ctx: &WidgetContext) {
    log::info!("[WIDGET] Loading {} items for {}", ctx.config.resource.as_str(), ctx.config.dataset);
    match api::list_unresolved(&ctx.config).await {
        Ok(items) => {
            log::info!("[WIDGET] Loaded {} items", items.len());
            store_apply_loaded(&ctx.store, items);
        }
        Err(err) => {
            log::error!("[WIDGET] Load failed: {}", err);
            store_set_error(&ctx.store, render::load_error_text(&err, &ctx.config.labels));
        }
    }
}

/// Submit a new item with the values typed into the form.
///
/// Returns true when the server accepted it.
pub async fn create_item(ctx: &WidgetContext, category: String, description: String) -> bool {
    let Some(new_item) = new_item(&ctx.config, category, description) else {
        log::warn!("[WIDGET] Ignoring create from anonymous session");
        return false;
    };

    let created = match api::create_item(&ctx.config, &new_item).await {
        Ok(created) => created,
        Err(err) => {
            log::error!("[WIDGET] Create failed: {}", err);
            store_set_error(&ctx.store, render::create_error_text(&err, &ctx.config.labels));
            return false;
        }
    };

    // Older hosts do not echo the created item, so look it up.
    let created = match created {
        Some(item) => CreatedItem::Echoed(item),
        None => CreatedItem::LookedUp(api::fetch_latest(&ctx.config).await),
    };

    let outcome = create_outcome(created, &ctx.config.labels);
    log::info!("[WIDGET] Created item {:?}", outcome.item.as_ref().map(|i| i.id.as_str()));
    store_apply_create_outcome(&ctx.store, outcome);
    true
}

/// Ask the server to resolve `id`.
///
/// Returns true on success; the row is removed by the caller once its
/// fade-out has finished (see [`finish_resolve`]).
pub async fn resolve_item(ctx: &WidgetContext, id: ItemId) -> bool {
    let Some(request) = resolve_request(&ctx.config, id) else {
        log::warn!("[WIDGET] Ignoring resolve from anonymous session");
        return false;
    };
    match api::resolve_item(&ctx.config, &request).await {
        Ok(()) => {
            log::info!("[WIDGET] Resolved item {}", request.item_id);
            store_clear_error(&ctx.store);
            true
        }
        Err(err) => {
            log::error!("[WIDGET] Resolve of {} failed: {}", request.item_id, err);
            store_set_error(&ctx.store, render::resolve_error_text(&err, &ctx.config.labels));
            false
        }
    }
}

/// Drop a resolved row from the list and lower the count
pub fn finish_resolve(ctx: &WidgetContext, id: &ItemId) {
    if !store_apply_resolved(&ctx.store, id) {
        log::debug!("[WIDGET] Item {} was no longer listed", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::encode_pairs;
    use crate::config::Resource;
    use crate::store::{WidgetState, WidgetStateStoreFields};
    use leptos::prelude::*;
    use reactive_stores::Store;

    fn make_item(id: &str) -> Item {
        Item {
            id: ItemId::new(id),
            category: "perf".to_string(),
            description: "slow".to_string(),
            creator: "Bob".to_string(),
            created: "01 Jan 2024".to_string(),
        }
    }

    #[test]
    fn test_new_item_fills_session_fields() {
        let config = WidgetConfig::new(Resource::Issue, "roads", "bob");
        let new_item = new_item(&config, "perf".into(), "slow".into()).unwrap();
        assert_eq!(
            new_item,
            NewItem {
                creator: "bob".into(),
                package_name: "roads".into(),
                category_name: "perf".into(),
                description: "slow".into(),
            }
        );
        assert_eq!(
            encode_pairs(&new_item.form_fields()),
            "creator=bob&package_name=roads&category_name=perf&description=slow"
        );
    }

    #[test]
    fn test_new_item_submits_empty_values_as_typed() {
        let config = WidgetConfig::new(Resource::Todo, "roads", "bob");
        let new_item = new_item(&config, String::new(), String::new()).unwrap();
        assert_eq!(new_item.category_name, "");
        assert_eq!(new_item.description, "");
        assert_eq!(
            encode_pairs(&new_item.form_fields()),
            "creator=bob&package_name=roads&category_name=&description="
        );
    }

    #[test]
    fn test_anonymous_session_builds_no_requests() {
        let config = WidgetConfig::new(Resource::Issue, "roads", "");
        assert_eq!(new_item(&config, "perf".into(), "slow".into()), None);
        assert_eq!(resolve_request(&config, ItemId::new("42")), None);

        let config = WidgetConfig::new(Resource::Issue, "roads", "   ");
        assert_eq!(resolve_request(&config, ItemId::new("42")), None);
    }

    #[test]
    fn test_resolve_request_uses_session_user() {
        let config = WidgetConfig::new(Resource::Issue, "roads", "bob");
        let request = resolve_request(&config, ItemId::new("42")).unwrap();
        assert_eq!(request.item_id, ItemId::new("42"));
        assert_eq!(request.resolver, "bob");
    }

    #[test]
    fn test_create_outcome_branches() {
        let labels = Labels::for_resource(Resource::Issue);

        let echoed = create_outcome(CreatedItem::Echoed(make_item("9")), &labels);
        assert_eq!(echoed, CreateOutcome { item: Some(make_item("9")), error: None });

        let looked_up = create_outcome(CreatedItem::LookedUp(Ok(Some(make_item("10")))), &labels);
        assert_eq!(looked_up, CreateOutcome { item: Some(make_item("10")), error: None });

        let nothing = create_outcome(CreatedItem::LookedUp(Ok(None)), &labels);
        assert_eq!(nothing, CreateOutcome { item: None, error: None });

        let failed = create_outcome(
            CreatedItem::LookedUp(Err(ApiError::Status { status: 500, message: None })),
            &labels,
        );
        assert_eq!(failed.item, None);
        assert!(failed.error.unwrap().contains("(Error 500)"));
    }

    #[test]
    fn test_failed_lookup_still_counts_and_shows_error() {
        let store = Store::new(WidgetState::default());
        store_apply_loaded(&store, vec![make_item("1")]);

        let labels = Labels::for_resource(Resource::Issue);
        let outcome = create_outcome(
            CreatedItem::LookedUp(Err(ApiError::Network("offline".into()))),
            &labels,
        );
        store_apply_create_outcome(&store, outcome);

        assert_eq!(store.pending_count().get_untracked(), 2);
        assert_eq!(store.items().get_untracked().len(), 1);
        assert!(store.error().get_untracked().unwrap().contains("(Error 0)"));
    }

    #[test]
    fn test_created_row_goes_first_and_clears_error() {
        let store = Store::new(WidgetState::default());
        store_apply_loaded(&store, vec![make_item("1")]);
        store_set_error(&store, "Error: Please enter a category".to_string());

        let labels = Labels::for_resource(Resource::Issue);
        store_apply_create_outcome(&store, create_outcome(CreatedItem::Echoed(make_item("2")), &labels));

        assert_eq!(store.pending_count().get_untracked(), 2);
        assert_eq!(store.items().get_untracked()[0].id, ItemId::new("2"));
        assert_eq!(store.error().get_untracked(), None);
    }
}
