//! Count Badge Component
//!
//! Pending item count, mounted into the page header next to the dataset title.

use leptos::prelude::*;

use crate::config::{Labels, Resource};
use crate::render;
use crate::store::{WidgetStateStoreFields, WidgetStore};

/// Badge linking to the widget section.
///
/// Lives in its own mount root, so it takes the store as a prop instead of
/// reading the widget context.
#[component]
pub fn CountBadge(store: WidgetStore, resource: Resource, labels: Labels) -> impl IntoView {
    view! {
        <a
            id=resource.badge_id()
            class="button pcb"
            href=format!("#{}", resource.as_str())
        >
            <span>{move || render::badge_text(store.pending_count().get(), &labels)}</span>
        </a>
    }
}
