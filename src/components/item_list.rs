//! Item List Component
//!
//! Pending items of the dataset, newest first.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_widget;
use crate::render;
use crate::store::WidgetStateStoreFields;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_widget();
    let store = ctx.store;
    let empty_text = render::empty_list_text(&ctx.config.labels);

    view! {
        <div id=ctx.dom_id("list")>
            <Show
                when=move || store.items().with(|items| !items.is_empty())
                fallback=move || {
                    let text = empty_text.clone();
                    // nothing to say until the first read has answered
                    view! { <p class="empty-list">{move || store.loaded().get().then(|| text.clone())}</p> }
                }
            >
                <For
                    each=move || store.items().get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </Show>
        </div>
    }
}
