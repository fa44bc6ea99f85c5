//! Item Widget
//!
//! Root component: pending items of one dataset, with add and resolve.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{ErrorPanel, ItemList, NewItemForm};
use crate::config::WidgetConfig;
use crate::context::WidgetContext;
use crate::render;
use crate::store::{WidgetStateStoreFields, WidgetStore};

#[component]
pub fn Widget(config: WidgetConfig, store: WidgetStore) -> impl IntoView {
    let ctx = WidgetContext::new(config, store);
    provide_context(ctx.clone());

    // Load items on mount
    let loader = ctx.clone();
    Effect::new(move |_| {
        let ctx = loader.clone();
        spawn_local(async move {
            actions::load_items(&ctx).await;
        });
    });

    let logged_in = ctx.is_logged_in();
    let (add_label, add_enabled) = render::add_button(&ctx.config);
    let add_button_id = ctx.dom_id("button");

    view! {
        <div class="subsection item-widget">
            <h3>{ctx.config.labels.heading.clone()}</h3>

            // The add button only appears once the list has been read
            <Show when=move || store.loaded().get()>
                <button
                    id=add_button_id.clone()
                    type="button"
                    class="add-button"
                    disabled=move || !add_enabled || store.add_form_open().get()
                    on:click=move |_| {
                        if add_enabled {
                            store.add_form_open().set(true);
                        }
                    }
                >
                    {add_label.clone()}
                </button>
            </Show>

            {logged_in.then(|| view! { <NewItemForm /> })}

            <ErrorPanel />
            <ItemList />
        </div>
    }
}
