//! Frontend Models
//!
//! Data structures matching the `/api/2/<resource>` payloads.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned item identifier.
///
/// The API emits numeric ids for issues and string ids for older todo rows,
/// so both decode into the same opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ItemId(n.to_string()),
            RawId::Text(s) => ItemId(s),
        })
    }
}

/// Unresolved item as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Display name of the user who filed the item
    #[serde(default, deserialize_with = "null_as_empty")]
    pub creator: String,
    /// Already formatted by the server, e.g. `01 Jan 2024`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created: String,
}

/// Creator lookups come back null for deleted users.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload for `POST /api/2/<resource>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub creator: String,
    pub package_name: String,
    pub category_name: String,
    pub description: String,
}

impl NewItem {
    /// Form fields in the order the host controller documents them
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("creator", self.creator.as_str()),
            ("package_name", self.package_name.as_str()),
            ("category_name", self.category_name.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

/// Payload for `POST /api/2/<resource>/resolve`
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveRequest {
    pub item_id: ItemId,
    pub resolver: String,
}

impl ResolveRequest {
    /// The id key is resource specific (`issue_id`, `todo_id`).
    pub fn form_fields<'a>(&'a self, id_key: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            (id_key, self.item_id.as_str()),
            ("resolver", self.resolver.as_str()),
        ]
    }
}
