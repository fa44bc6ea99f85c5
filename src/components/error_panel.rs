//! Error Panel Component

use leptos::prelude::*;

use crate::context::use_widget;
use crate::store::WidgetStateStoreFields;

/// Shows the latest error, replacing the previous one
#[component]
pub fn ErrorPanel() -> impl IntoView {
    let ctx = use_widget();
    let store = ctx.store;

    view! {
        <div id=ctx.dom_id("error") class="widget-error" role="alert">
            {move || store.error().get()}
        </div>
    }
}
