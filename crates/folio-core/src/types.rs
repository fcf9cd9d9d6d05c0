//! Core types for Folio

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Facet names shared by the categorical filters.
pub mod facet {
    /// Year the item was made, e.g. `"2023"`
    pub const YEAR: &str = "year";
    /// Subject of the item, e.g. `"Travel"`
    pub const TOPIC: &str = "topic";
    /// Folder the asset lives in on the CDN
    pub const FOLDER: &str = "folder";
    /// Blog post tag
    pub const TAG: &str = "tag";
}

/// A unit of displayable content: a photo or a portfolio entry.
///
/// Items are never mutated once a collection is loaded. Filtering and
/// batching build index views over a shared `Arc<[MediaItem]>` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique within a collection and stable across re-fetches
    pub id: String,
    /// Low-cost preview, also used as the lightbox placeholder
    pub thumbnail_url: String,
    /// Full quality render
    pub full_res_url: String,
    /// Human-readable description
    #[serde(default)]
    pub alt_text: String,
    /// Classification tags keyed by facet (`year`, `topic`, ...)
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
    /// Opaque descriptive fields, only read by text search
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

impl MediaItem {
    /// Create an item with no categories or extra fields
    pub fn new(
        id: impl Into<String>,
        thumbnail_url: impl Into<String>,
        full_res_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: thumbnail_url.into(),
            full_res_url: full_res_url.into(),
            alt_text: alt_text.into(),
            categories: BTreeMap::new(),
            fields: serde_json::Map::new(),
        }
    }

    /// Tag the item under a facet. Empty values are dropped.
    pub fn with_category(mut self, facet: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.categories.insert(facet.to_string(), value);
        }
        self
    }

    /// Attach an opaque descriptive field. Null values are dropped.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    /// Value of a category facet, if tagged
    pub fn category(&self, facet: &str) -> Option<&str> {
        self.categories.get(facet).map(String::as_str)
    }

    /// All classification tags, in facet order
    pub fn category_tags(&self) -> impl Iterator<Item = &str> {
        self.categories.values().map(String::as_str)
    }

    /// A descriptive field as text, if present and a string
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Title for display: the `title` field, falling back to the alt text
    pub fn title(&self) -> &str {
        self.field_str("title")
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.alt_text)
    }
}

/// Anything addressable by a stable id within its collection.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for MediaItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_drops_empty_values() {
        let item = MediaItem::new("p1", "t.jpg", "f.jpg", "Harbour")
            .with_category(facet::YEAR, "2023")
            .with_category(facet::TOPIC, "")
            .with_field("title", "Harbour at dusk")
            .with_field("summary", Value::Null);

        assert_eq!(item.category(facet::YEAR), Some("2023"));
        assert_eq!(item.category(facet::TOPIC), None);
        assert_eq!(item.field_str("title"), Some("Harbour at dusk"));
        assert!(!item.fields.contains_key("summary"));
    }

    #[test]
    fn test_title_falls_back_to_alt() {
        let item = MediaItem::new("p1", "t.jpg", "f.jpg", "Harbour");
        assert_eq!(item.title(), "Harbour");

        let titled = item.with_field("title", "Dusk");
        assert_eq!(titled.title(), "Dusk");
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id":"a","thumbnail_url":"t","full_res_url":"f"}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.alt_text, "");
        assert!(item.categories.is_empty());
        assert!(item.fields.is_empty());
    }

    #[test]
    fn test_category_tags_in_facet_order() {
        let item = MediaItem::new("a", "t", "f", "")
            .with_category(facet::YEAR, "2021")
            .with_category(facet::TOPIC, "Street");
        let tags: Vec<&str> = item.category_tags().collect();
        // BTreeMap orders facets alphabetically: topic < year
        assert_eq!(tags, vec!["Street", "2021"]);
    }
}
