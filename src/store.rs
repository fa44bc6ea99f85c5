//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Item, ItemId};

/// Session state of one mounted widget
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Unresolved items, newest first
    pub items: Vec<Item>,
    /// Pending count shown in the badge; tracks the server after a load and
    /// is adjusted locally after create/resolve
    pub pending_count: usize,
    /// Text of the single error panel
    pub error: Option<String>,
    /// Whether the add form is open
    pub add_form_open: bool,
    /// A create request is in flight
    pub creating: bool,
    /// The initial load has completed at least once
    pub loaded: bool,
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

// ========================
// Pure list transitions
// ========================

/// Put a freshly created item at the head, unless it is already listed
pub fn prepend_item(items: &mut Vec<Item>, item: Item) -> bool {
    if items.iter().any(|existing| existing.id == item.id) {
        return false;
    }
    items.insert(0, item);
    true
}

/// Remove the item with `id`; reports whether it was present
pub fn remove_item(items: &mut Vec<Item>, id: &ItemId) -> bool {
    let before = items.len();
    items.retain(|item| &item.id != id);
    items.len() != before
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fresh server read
pub fn store_apply_loaded(store: &WidgetStore, items: Vec<Item>) {
    store.pending_count().set(items.len());
    store.items().set(items);
    store.error().set(None);
    store.loaded().set(true);
}

/// A create succeeded; `item` is the created row when it could be obtained.
///
/// The count always goes up, even when `item` is already listed and is not
/// prepended again, so after such a create the count exceeds the listed rows
/// until the next [`store_apply_loaded`].
pub fn store_apply_created(store: &WidgetStore, item: Option<Item>) {
    store.pending_count().update(|count| *count += 1);
    if let Some(item) = item {
        prepend_item(&mut store.items().write(), item);
    }
}

/// A resolve succeeded; only a listed item lowers the count
pub fn store_apply_resolved(store: &WidgetStore, id: &ItemId) -> bool {
    let removed = remove_item(&mut store.items().write(), id);
    if removed {
        store.pending_count().update(|count| *count = count.saturating_sub(1));
    }
    removed
}

pub fn store_set_error(store: &WidgetStore, text: String) {
    store.error().set(Some(text));
}

pub fn store_clear_error(store: &WidgetStore) {
    store.error().set(None);
}
