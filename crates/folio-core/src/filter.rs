//! Search and categorical filtering over immutable collections.
//!
//! Filtering is a linear scan that never reorders. Sorting is a separate,
//! explicit step applied to the filtered view before batching.
//!
//! ```ignore
//! let source: Arc<[MediaItem]> = photos.into();
//! let view = FilteredView::all(source)
//!     .search("harbour")
//!     .with_categories(&CategoryFilter::new().select(facet::YEAR, "2023"))
//!     .sorted_by_date(SortDirection::Descending);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::types::{facet, Identified, MediaItem};

/// Sentinel selection that bypasses a categorical filter
pub const ALL: &str = "all";

/// A record that can be matched by free-text search and categorical filters.
pub trait Searchable {
    /// Every field value rendered as text. Array fields come joined with
    /// spaces; absent or null fields are left out.
    fn search_texts(&self) -> Vec<String>;

    /// Value of a classification facet
    fn category(&self, _facet: &str) -> Option<Cow<'_, str>> {
        None
    }

    /// Date used by the sort step (`YYYY`, `YYYY-MM`, `YYYY-MM-DD` or RFC 3339)
    fn date_key(&self) -> Option<&str> {
        None
    }
}

/// Render a JSON value the way search sees it.
///
/// Arrays are joined with spaces and objects contribute their leaf values.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Object(map) => Some(
            map.values()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

impl Searchable for MediaItem {
    fn search_texts(&self) -> Vec<String> {
        let mut texts = vec![
            self.id.clone(),
            self.thumbnail_url.clone(),
            self.full_res_url.clone(),
            self.alt_text.clone(),
        ];
        texts.extend(self.categories.values().cloned());
        texts.extend(self.fields.values().filter_map(value_text));
        texts
    }

    fn category(&self, facet: &str) -> Option<Cow<'_, str>> {
        MediaItem::category(self, facet).map(Cow::Borrowed)
    }

    fn date_key(&self) -> Option<&str> {
        self.field_str("dateFrom")
            .or_else(|| self.field_str("date"))
            .or_else(|| MediaItem::category(self, facet::YEAR))
    }
}

impl Searchable for Value {
    fn search_texts(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.values().filter_map(value_text).collect(),
            other => value_text(other).into_iter().collect(),
        }
    }

    fn category(&self, facet: &str) -> Option<Cow<'_, str>> {
        self.get(facet).and_then(Value::as_str).map(Cow::Borrowed)
    }

    fn date_key(&self) -> Option<&str> {
        self.get("dateFrom").and_then(Value::as_str)
    }
}

/// Whether `item` matches a free-text query (case-insensitive substring).
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_texts()
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

/// Free-text filter. An empty query returns every item in order.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}

/// Categorical filter. Facets set to [`ALL`] are ignored.
pub fn filter_categories<T: Searchable + Clone>(items: &[T], categories: &CategoryFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| categories.matches(*item))
        .cloned()
        .collect()
}

/// Selected value per facet, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selections: BTreeMap<String, String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CategoryFilter::set`]
    pub fn select(mut self, facet: &str, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    /// Select a value for a facet. [`ALL`] clears the facet.
    pub fn set(&mut self, facet: &str, value: impl Into<String>) {
        let value = value.into();
        if is_all(&value) {
            self.selections.remove(facet);
        } else {
            self.selections.insert(facet.to_string(), value);
        }
    }

    /// Current selection for a facet, [`ALL`] when unset
    pub fn selection(&self, facet: &str) -> &str {
        self.selections.get(facet).map(String::as_str).unwrap_or(ALL)
    }

    /// Whether any facet narrows the collection
    pub fn is_active(&self) -> bool {
        !self.selections.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.selections
            .iter()
            .all(|(facet, wanted)| item.category(facet).is_some_and(|v| v == wanted.as_str()))
    }
}

fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case(ALL)
}

/// Distinct values of a facet, prefixed with [`ALL`].
///
/// Years come newest first; other facets alphabetically.
pub fn facet_values<T: Searchable>(items: &[T], facet_name: &str) -> Vec<String> {
    let distinct: BTreeSet<String> = items
        .iter()
        .filter_map(|item| item.category(facet_name).map(Cow::into_owned))
        .filter(|v| !v.is_empty())
        .collect();

    let mut values: Vec<String> = distinct.into_iter().collect();
    if facet_name == facet::YEAR {
        values.reverse();
    }
    values.insert(0, ALL.to_string());
    values
}

/// Parse the date formats found in content records.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(date);
    }
    raw.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Newest first
    #[default]
    Descending,
    Ascending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }
}

/// Compare two records by date. Undated records go last either way.
fn compare_dates<T: Searchable>(a: &T, b: &T, direction: SortDirection) -> Ordering {
    let da = a.date_key().and_then(parse_date);
    let db = b.date_key().and_then(parse_date);
    match (da, db) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Descending => y.cmp(&x),
            SortDirection::Ascending => x.cmp(&y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable date sort; ties keep their current order
pub fn sort_by_date<T: Searchable>(items: &mut [T], direction: SortDirection) {
    items.sort_by(|a, b| compare_dates(a, b, direction));
}

/// Newest first, undated last
pub fn sort_by_date_desc<T: Searchable>(items: &mut [T]) {
    sort_by_date(items, SortDirection::Descending);
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A derived view over an immutable source collection.
///
/// Each derivation gets a fresh generation number; consumers such as the
/// progressive loader reset their state when the generation changes.
#[derive(Debug)]
pub struct FilteredView<T = MediaItem> {
    source: Arc<[T]>,
    indices: Arc<[usize]>,
    generation: u64,
}

impl<T> Clone for FilteredView<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            indices: Arc::clone(&self.indices),
            generation: self.generation,
        }
    }
}

impl<T> PartialEq for FilteredView<T> {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
            && Arc::ptr_eq(&self.source, &other.source)
            && self.indices == other.indices
    }
}

impl<T> Default for FilteredView<T> {
    fn default() -> Self {
        Self::all(Arc::from(Vec::new()))
    }
}

impl<T> FilteredView<T> {
    /// Identity view over the whole source
    pub fn all(source: Arc<[T]>) -> Self {
        let indices: Arc<[usize]> = (0..source.len()).collect();
        Self {
            source,
            indices,
            generation: next_generation(),
        }
    }

    fn derive(&self, indices: Vec<usize>) -> Self {
        Self {
            source: Arc::clone(&self.source),
            indices: indices.into(),
            generation: next_generation(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The collection this view was derived from
    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.indices.get(position).map(|&i| &self.source[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.indices.iter().map(move |&i| &self.source[i])
    }

    /// The first `count` items (or all of them when fewer)
    pub fn prefix(&self, count: usize) -> impl Iterator<Item = &T> + '_ {
        self.iter().take(count)
    }

    /// Keep items satisfying `predicate`, preserving order
    pub fn retain(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&i| predicate(&self.source[i]))
            .collect();
        self.derive(indices)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Searchable> FilteredView<T> {
    /// Free-text narrowing
    pub fn search(&self, query: &str) -> Self {
        if query.is_empty() {
            return self.derive(self.indices.to_vec());
        }
        self.retain(|item| matches_query(item, query))
    }

    /// Categorical narrowing
    pub fn with_categories(&self, categories: &CategoryFilter) -> Self {
        self.retain(|item| categories.matches(item))
    }

    /// Explicit sort step, stable
    pub fn sorted_by_date(&self, direction: SortDirection) -> Self {
        let mut indices = self.indices.to_vec();
        indices.sort_by(|&a, &b| compare_dates(&self.source[a], &self.source[b], direction));
        self.derive(indices)
    }
}

impl<T: Identified> FilteredView<T> {
    /// Position of the item with `id` inside this view
    pub fn position(&self, id: &str) -> Option<usize> {
        self.iter().position(|item| item.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

/// Full query applied by the gallery pages: text, then categories, then sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryQuery {
    pub text: String,
    pub categories: CategoryFilter,
    pub sort: Option<SortDirection>,
}

impl GalleryQuery {
    pub fn apply<T: Searchable>(&self, source: &Arc<[T]>) -> FilteredView<T> {
        let view = FilteredView::all(Arc::clone(source))
            .search(&self.text)
            .with_categories(&self.categories);
        match self.sort {
            Some(direction) => view.sorted_by_date(direction),
            None => view,
        }
    }
}
