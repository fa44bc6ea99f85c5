//! Item Row Component
//!
//! One pending item as a small field table, with its resolve button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_widget;
use crate::models::Item;
use crate::render;

/// Fade-out before a resolved row is dropped, in milliseconds
pub const FADE_MS: u32 = 500;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_widget();
    let resource = ctx.config.resource.as_str();
    let logged_in = ctx.is_logged_in();

    let (resolving, set_resolving) = signal(false);
    let (fading, set_fading) = signal(false);

    let id = item.id.clone();
    let title_class = format!("{}-list-title", resource);
    let fields: Vec<(&'static str, String)> = render::item_fields(&item)
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();

    let on_resolve = {
        let ctx = ctx.clone();
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            // one request per row at a time
            if resolving.get_untracked() {
                return;
            }
            set_resolving.set(true);

            let ctx = ctx.clone();
            let id = id.clone();
            spawn_local(async move {
                if actions::resolve_item(&ctx, id.clone()).await {
                    set_fading.set(true);
                    TimeoutFuture::new(FADE_MS).await;
                    actions::finish_resolve(&ctx, &id);
                } else {
                    set_resolving.set(false);
                }
            });
        }
    };

    let resolve_row = logged_in.then(|| {
        let title_class = title_class.clone();
        view! {
            <tr>
                <td class=title_class></td>
                <td>
                    <button
                        type="button"
                        class="resolve-button"
                        data-item-id=id.to_string()
                        disabled=move || resolving.get()
                        on:click=on_resolve
                    >
                        {render::RESOLVE_LABEL}
                    </button>
                </td>
            </tr>
        }
    });

    view! {
        <table
            id=ctx.dom_id(&format!("item-{}", item.id))
            class=format!("{}-item", resource)
            style:transition=format!("opacity {}ms", FADE_MS)
            style:opacity=move || if fading.get() { "0" } else { "1" }
        >
            <tbody>
                {fields.into_iter().map(|(label, value)| view! {
                    <tr>
                        <td class=title_class.clone()>{label}</td>
                        <td>{value}</td>
                    </tr>
                }).collect_view()}
                {resolve_row}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = include_str!("item_row.rs");

    #[test]
    fn test_item_id_is_only_tagged_on_resolve_button() {
        let attr = concat!("data-item", "-id=");
        let view_src = SOURCE.split("#[cfg(test)]").next().unwrap();
        assert_eq!(view_src.matches(attr).count(), 1);
        let button = view_src.find("class=\"resolve-button\"").unwrap();
        let tagged = view_src.find(attr).unwrap();
        assert!(tagged > button && tagged < view_src.find("<table").unwrap());
    }
}
