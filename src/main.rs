#![allow(warnings)]
//! Dataset Item Widget Entry Point
//!
//! Mounts one widget per `[data-item-widget]` element on the page, plus its
//! count badge when the page has a `#<resource>-count` anchor.

mod models;
mod config;
mod api;
mod render;
mod store;
mod context;
mod actions;
mod components;
mod app;

use app::Widget;
use components::CountBadge;
use config::{ConfigError, WidgetConfig};
use leptos::prelude::*;
use reactive_stores::Store;
use store::WidgetState;
use wasm_bindgen::JsCast;

/// Attribute marking a widget host element
const HOST_SELECTOR: &str = "[data-item-widget]";

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = mount_widgets() {
        log::error!("[WIDGET] Not started: {}", err);
    }
}

fn mount_widgets() -> Result<(), ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ConfigError::MissingHost("document".to_string()))?;

    let hosts = document
        .query_selector_all(HOST_SELECTOR)
        .map_err(|_| ConfigError::MissingHost(HOST_SELECTOR.to_string()))?;
    if hosts.length() == 0 {
        return Err(ConfigError::MissingHost(HOST_SELECTOR.to_string()));
    }

    for index in 0..hosts.length() {
        let Some(host) = hosts.item(index).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        // One bad host should not keep the others from starting
        match WidgetConfig::from_element(&host) {
            Ok(config) => mount_widget(&document, host, config),
            Err(err) => log::error!("[WIDGET] Skipping host #{}: {}", index, err),
        }
    }
    Ok(())
}

fn mount_widget(document: &web_sys::Document, host: web_sys::HtmlElement, config: WidgetConfig) {
    log::info!(
        "[WIDGET] Mounting {} widget for {} (user: {})",
        config.resource.as_str(),
        config.dataset,
        if config.is_logged_in() { config.user_id.as_str() } else { "anonymous" }
    );

    // Shared by the widget and its badge, which live in separate mount roots
    let store = Store::new(WidgetState::default());

    let badge_anchor = document
        .get_element_by_id(&config.resource.dom_id("count"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match badge_anchor {
        Some(anchor) => {
            replace_static_badge(&anchor, &config.resource.badge_id());
            let resource = config.resource;
            let labels = config.labels.clone();
            leptos::mount::mount_to(anchor, move || {
                view! { <CountBadge store=store resource=resource labels=labels /> }
            })
            .forget();
        }
        None => log::debug!("[WIDGET] No #{} anchor, badge not shown", config.resource.dom_id("count")),
    }

    leptos::mount::mount_to(host, move || view! { <Widget config=config store=store /> }).forget();
}

/// Drop the server-rendered badge so only the live one remains
fn replace_static_badge(anchor: &web_sys::HtmlElement, badge_id: &str) {
    while let Ok(Some(stale)) = anchor.query_selector(&format!("#{}", badge_id)) {
        log::debug!("[WIDGET] Replacing static #{}", badge_id);
        stale.remove();
    }
}
