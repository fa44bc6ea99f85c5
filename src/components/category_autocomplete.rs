//! Category Autocomplete Component
//!
//! Category input that asks the host for matching category names while the
//! user types.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_widget;

/// Wait this long after the last keystroke before querying, in milliseconds
const DEBOUNCE_MS: u32 = 250;

/// Index after moving the highlight by `delta`, clamped to the list
pub fn move_selection(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

/// Category input with suggestions
///
/// Props:
/// - value / set_value: the input's text, owned by the form
#[component]
pub fn CategoryAutocomplete(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let ctx = use_widget();
    let config = ctx.config.clone();
    let input_class = format!("autocomplete-{}-category", config.resource.as_str());

    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (selected_idx, set_selected_idx) = signal(0usize);
    // Bumped on every keystroke so late answers for older input are dropped
    let (lookup, set_lookup) = signal(0u32);

    let close = move || {
        set_lookup.update(|n| *n += 1);
        set_suggestions.set(Vec::new());
        set_selected_idx.set(0);
    };

    let pick = move |name: String| {
        set_value.set(name);
        close();
    };

    let on_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        set_value.set(term.clone());
        set_selected_idx.set(0);

        let generation = lookup.get_untracked() + 1;
        set_lookup.set(generation);
        if term.trim().is_empty() {
            set_suggestions.set(Vec::new());
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if lookup.try_get_untracked() != Some(generation) {
                return;
            }
            match api::category_suggestions(&config, &term).await {
                Ok(names) => {
                    if lookup.try_get_untracked() == Some(generation) {
                        set_suggestions.try_set(names);
                    }
                }
                Err(err) => log::warn!("[WIDGET] Category lookup failed: {}", err),
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get_untracked();
        if sugg.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_selected_idx.update(|i| *i = move_selection(*i, sugg.len(), 1));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|i| *i = move_selection(*i, sugg.len(), -1));
            }
            "Tab" | "Enter" => {
                ev.prevent_default();
                if let Some(name) = sugg.get(selected_idx.get_untracked()) {
                    pick(name.clone());
                }
            }
            "Escape" => close(),
            _ => {}
        }
    };

    view! {
        <div class="category-input-wrapper">
            <input
                name="category_name"
                type="text"
                class=input_class
                autocomplete="off"
                prop:value=move || value.get()
                on:input=on_input
                on:keydown=on_keydown
            />

            {move || {
                let sugg = suggestions.get();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let name_for_click = name.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:mousedown=move |ev| {
                                            // keep focus in the input
                                            ev.prevent_default();
                                            pick(name_for_click.clone());
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_clamps() {
        assert_eq!(move_selection(0, 3, 1), 1);
        assert_eq!(move_selection(2, 3, 1), 2);
        assert_eq!(move_selection(0, 3, -1), 0);
        assert_eq!(move_selection(2, 3, -1), 1);
    }

    #[test]
    fn test_move_selection_empty_list() {
        assert_eq!(move_selection(4, 0, 1), 0);
        assert_eq!(move_selection(0, 0, -1), 0);
    }
}
