//! Widget Configuration
//!
//! The host page describes the widget with `data-*` attributes on its mount
//! element, e.g.
//!
//! ```html
//! <div data-item-widget data-resource="issue" data-package="my-dataset" data-user-id="7c1f..."></div>
//! ```
//!
//! A `#<resource>-count` element elsewhere on the page receives the count
//! badge. A server-rendered `a#package-<resource>-count` inside it is
//! replaced, so the page keeps a single badge.

use std::str::FromStr;
use thiserror::Error;

/// Which flavour of the widget is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Todo,
    Issue,
}

impl Resource {
    /// Path segment used by the API and DOM identifiers
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Todo => "todo",
            Resource::Issue => "issue",
        }
    }

    /// Form key carrying the item id on resolve (`todo_id`, `issue_id`)
    pub fn id_key(self) -> &'static str {
        match self {
            Resource::Todo => "todo_id",
            Resource::Issue => "issue_id",
        }
    }

    /// DOM id for a named part of the widget, e.g. `issue-list`
    pub fn dom_id(self, part: &str) -> String {
        format!("{}-{}", self.as_str(), part)
    }

    /// Id of the count badge, which replaces any server-rendered badge of the same id
    pub fn badge_id(self) -> String {
        format!("package-{}-count", self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Resource::Todo),
            "issue" => Ok(Resource::Issue),
            other => Err(ConfigError::UnknownResource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown widget resource '{0}' (expected 'todo' or 'issue')")]
    UnknownResource(String),
    #[error("missing required attribute data-{0}")]
    MissingAttribute(&'static str),
    #[error("no '{0}' on this page")]
    MissingHost(String),
}

/// Display strings that differ between the todo and issue flavours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Lowercase noun used in sentences ("issue")
    pub noun: String,
    /// Capitalised noun for the section heading ("Issue")
    pub heading: String,
    /// Badge text when nothing is pending
    pub badge_empty: String,
}

impl Labels {
    pub fn for_resource(resource: Resource) -> Self {
        let noun = resource.as_str().to_string();
        Self {
            heading: capitalize(&noun),
            noun,
            badge_empty: "Nothing Todo".to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything the widget needs to know about the page it lives on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub resource: Resource,
    /// Dataset (package) name or id the items belong to
    pub dataset: String,
    /// Current user id, empty when anonymous
    pub user_id: String,
    /// Prefix for API URLs, empty for same origin
    pub api_base: String,
    pub labels: Labels,
}

impl WidgetConfig {
    pub fn new(resource: Resource, dataset: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            resource,
            dataset: dataset.into(),
            user_id: user_id.into().trim().to_string(),
            api_base: String::new(),
            labels: Labels::for_resource(resource),
        }
    }

    /// Build from attribute lookups; `attr("package")` reads `data-package`.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let resource = match attr("resource") {
            Some(r) if !r.trim().is_empty() => r.parse()?,
            _ => Resource::Issue,
        };

        let dataset = attr("package")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingAttribute("package"))?;

        let mut config = Self::new(resource, dataset, attr("user-id").unwrap_or_default());

        if let Some(base) = attr("api-base") {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(noun) = attr("label-noun").filter(|n| !n.trim().is_empty()) {
            config.labels.heading = capitalize(noun.trim());
            config.labels.noun = noun.trim().to_string();
        }
        if let Some(heading) = attr("label-heading").filter(|h| !h.trim().is_empty()) {
            config.labels.heading = heading.trim().to_string();
        }

        Ok(config)
    }

    /// Read the `data-*` attributes of a host element
    pub fn from_element(element: &web_sys::Element) -> Result<Self, ConfigError> {
        Self::from_attrs(|name| element.get_attribute(&format!("data-{}", name)))
    }

    /// Add and resolve are only offered to a known user
    pub fn is_logged_in(&self) -> bool {
        !self.user_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_to_issue() {
        let config = WidgetConfig::from_attrs(attrs(&[("package", "census-2011")])).unwrap();
        assert_eq!(config.resource, Resource::Issue);
        assert_eq!(config.dataset, "census-2011");
        assert_eq!(config.api_base, "");
        assert!(!config.is_logged_in());
        assert_eq!(config.labels.heading, "Issue");
        assert_eq!(config.labels.badge_empty, "Nothing Todo");
    }

    #[test]
    fn test_todo_flavour() {
        let config = WidgetConfig::from_attrs(attrs(&[
            ("resource", "TODO"),
            ("package", "roads"),
            ("user-id", "bob"),
            ("api-base", "https://data.example.org/"),
        ]))
        .unwrap();
        assert_eq!(config.resource, Resource::Todo);
        assert_eq!(config.resource.id_key(), "todo_id");
        assert_eq!(config.resource.dom_id("list"), "todo-list");
        assert_eq!(config.resource.dom_id("count"), "todo-count");
        assert_eq!(config.resource.badge_id(), "package-todo-count");
        assert_eq!(config.api_base, "https://data.example.org");
        assert_eq!(config.labels.noun, "todo");
        assert!(config.is_logged_in());
    }

    #[test]
    fn test_badge_id_differs_from_its_anchor() {
        for resource in [Resource::Todo, Resource::Issue] {
            assert_ne!(resource.badge_id(), resource.dom_id("count"));
        }
        assert_eq!(Resource::Issue.badge_id(), "package-issue-count");
    }

    #[test]
    fn test_missing_package_is_an_error() {
        assert_eq!(
            WidgetConfig::from_attrs(attrs(&[("resource", "issue")])),
            Err(ConfigError::MissingAttribute("package"))
        );
        assert_eq!(
            WidgetConfig::from_attrs(attrs(&[("package", "   ")])),
            Err(ConfigError::MissingAttribute("package"))
        );
    }

    #[test]
    fn test_unknown_resource() {
        let err = WidgetConfig::from_attrs(attrs(&[("resource", "ticket"), ("package", "x")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownResource("ticket".into()));
    }

    #[test]
    fn test_blank_user_is_anonymous() {
        let config = WidgetConfig::new(Resource::Issue, "x", "  ");
        assert!(!config.is_logged_in());
    }

    #[test]
    fn test_label_overrides() {
        let config = WidgetConfig::from_attrs(attrs(&[
            ("package", "x"),
            ("label-noun", "ticket"),
        ]))
        .unwrap();
        assert_eq!(config.labels.noun, "ticket");
        assert_eq!(config.labels.heading, "Ticket");

        let config = WidgetConfig::from_attrs(attrs(&[
            ("package", "x"),
            ("label-heading", "Data problems"),
        ]))
        .unwrap();
        assert_eq!(config.labels.noun, "issue");
        assert_eq!(config.labels.heading, "Data problems");
    }
}
