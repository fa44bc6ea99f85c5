//! New Item Form Component
//!
//! Category and description form for adding an item to the dataset.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::CategoryAutocomplete;
use crate::context::use_widget;
use crate::store::WidgetStateStoreFields;

/// Show/hide transition of the form, in milliseconds
const SLIDE_MS: u32 = 500;

/// Form for creating new items; only mounted for logged in users
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_widget();
    let store = ctx.store;
    let form_id = ctx.dom_id("add");
    let button_id = ctx.dom_id("add-button");

    let (category, set_category) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Keep the form in the layout until its fade-out has finished
    let open = Memo::new(move |_| store.add_form_open().get());
    let (displayed, set_displayed) = signal(false);
    Effect::new(move |_| {
        if open.get() {
            set_displayed.set(true);
        } else {
            spawn_local(async move {
                TimeoutFuture::new(SLIDE_MS).await;
                if open.try_get_untracked() == Some(false) {
                    set_displayed.try_set(false);
                }
            });
        }
    });

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.creating().get_untracked() {
            return;
        }
        store.creating().set(true);

        // Submitted as typed; the host validates.
        let category_value = category.get_untracked();
        let description_value = description.get_untracked();
        let ctx = ctx.clone();
        spawn_local(async move {
            if actions::create_item(&ctx, category_value, description_value).await {
                set_category.set(String::new());
                set_description.set(String::new());
                store.add_form_open().set(false);
            }
            store.creating().set(false);
        });
    };

    view! {
        <div
            id=form_id
            style:display=move || if displayed.get() { "block" } else { "none" }
            style:opacity=move || if open.get() { "1" } else { "0" }
            style:transition=format!("opacity {}ms", SLIDE_MS)
        >
            <form class="new-item-form" on:submit=create_item>
                <div>
                    <label for="category_name">"Category"</label>
                    <CategoryAutocomplete value=category set_value=set_category />
                </div>
                <div>
                    <label for="description">"Description"</label>
                    <textarea
                        name="description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <button
                        id=button_id
                        type="submit"
                        class="positive-button pcb"
                        disabled=move || store.creating().get()
                    >
                        "Add"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| store.add_form_open().set(false)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
