//! Widget Context
//!
//! Configuration and state shared with every component of one widget.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::store::WidgetStore;

/// Provided by the root component via the Leptos context API
#[derive(Clone)]
pub struct WidgetContext {
    pub config: Arc<WidgetConfig>,
    pub store: WidgetStore,
}

impl WidgetContext {
    pub fn new(config: WidgetConfig, store: WidgetStore) -> Self {
        Self { config: Arc::new(config), store }
    }

    pub fn is_logged_in(&self) -> bool {
        self.config.is_logged_in()
    }

    /// DOM id for a part of this widget, e.g. `issue-add-button`
    pub fn dom_id(&self, part: &str) -> String {
        self.config.resource.dom_id(part)
    }
}

/// Get the widget context; only valid below `<Widget/>`
pub fn use_widget() -> WidgetContext {
    expect_context::<WidgetContext>()
}
