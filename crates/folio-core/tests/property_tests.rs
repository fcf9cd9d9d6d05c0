//! Property-based tests for filtering, batching and lightbox navigation
//!
//! Uses proptest to check the pipeline invariants over generated collections.

use std::sync::Arc;

use folio_core::{
    facet, filter, transform_url, CategoryFilter, FilteredView, Lightbox, MediaItem,
    ProgressiveLoader, ALL,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,12}").expect("valid regex")
}

fn year_strategy() -> impl Strategy<Value = String> {
    (2015u32..2025).prop_map(|y| y.to_string())
}

/// Items with unique ids, a year and a free-text title
fn items_strategy(max: usize) -> impl Strategy<Value = Vec<MediaItem>> {
    prop::collection::vec((word_strategy(), year_strategy()), 0..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, year))| {
                MediaItem::new(format!("id{i}"), "", "", "")
                    .with_category(facet::YEAR, year)
                    .with_field("title", title)
            })
            .collect()
    })
}

fn item_contains(item: &MediaItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    let mut texts = vec![
        item.id.clone(),
        item.thumbnail_url.clone(),
        item.full_res_url.clone(),
        item.alt_text.clone(),
    ];
    texts.extend(item.categories.values().cloned());
    texts.extend(item.fields.values().filter_map(|v| v.as_str().map(str::to_string)));
    texts.iter().any(|t| t.to_lowercase().contains(&needle))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An item survives the text filter iff one of its fields contains the query
    #[test]
    fn filter_keeps_exactly_matching_items(items in items_strategy(30), query in word_strategy()) {
        let kept = filter(&items, &query);
        let expected: Vec<MediaItem> = items.iter().filter(|i| item_contains(i, &query)).cloned().collect();
        prop_assert_eq!(kept, expected);
    }

    /// The empty query is the identity
    #[test]
    fn empty_query_is_identity(items in items_strategy(30)) {
        prop_assert_eq!(filter(&items, ""), items);
    }

    /// Search ignores case
    #[test]
    fn search_is_case_insensitive(items in items_strategy(20), query in word_strategy()) {
        prop_assert_eq!(filter(&items, &query.to_uppercase()), filter(&items, &query.to_lowercase()));
    }

    /// `year = all` keeps everything; `year = Y` keeps only year Y
    #[test]
    fn year_filter_identity_and_exactness(items in items_strategy(30), year in year_strategy()) {
        let source: Arc<[MediaItem]> = items.into();
        let all = FilteredView::all(Arc::clone(&source));

        let everything = all.with_categories(&CategoryFilter::new().select(facet::YEAR, ALL));
        prop_assert_eq!(everything.len(), source.len());

        let only = all.with_categories(&CategoryFilter::new().select(facet::YEAR, year.clone()));
        prop_assert!(only.iter().all(|i| i.category(facet::YEAR) == Some(year.as_str())));
        let expected = source.iter().filter(|i| i.category(facet::YEAR) == Some(year.as_str())).count();
        prop_assert_eq!(only.len(), expected);
    }

    /// After N loads the visible count is min(B * (1 + N), len) and never shrinks
    #[test]
    fn batch_growth_is_monotonic(len in 0usize..200, batch in 1usize..40, loads in 0usize..12) {
        let mut loader = ProgressiveLoader::with_total(batch, len);
        let mut previous = loader.visible_count();
        for _ in 0..loads {
            if let Some(ticket) = loader.request_more() {
                loader.commit(ticket);
            }
            prop_assert!(loader.visible_count() >= previous);
            previous = loader.visible_count();
        }
        prop_assert_eq!(loader.visible_count(), (batch * (1 + loads)).min(len));
        prop_assert_eq!(loader.has_more(), loader.visible_count() < len);
    }

    /// Next from the last item wraps to 0; previous from 0 wraps to the last
    #[test]
    fn lightbox_wraps_both_ways(len in 2usize..50) {
        let source: Arc<[MediaItem]> = (0..len).map(|i| MediaItem::new(format!("id{i}"), "", "", "")).collect();
        let view = FilteredView::all(source);
        let mut lightbox = Lightbox::default();

        lightbox.open(&view, len - 1);
        lightbox.next(&view);
        prop_assert_eq!(lightbox.position(), Some(0));

        lightbox.prev(&view);
        prop_assert_eq!(lightbox.position(), Some(len - 1));
    }

    /// A full round of `next` returns to the starting item
    #[test]
    fn lightbox_full_cycle(len in 1usize..30, start in 0usize..30) {
        let start = start % len;
        let source: Arc<[MediaItem]> = (0..len).map(|i| MediaItem::new(format!("id{i}"), "", "", "")).collect();
        let view = FilteredView::all(source);
        let mut lightbox = Lightbox::default();
        lightbox.open(&view, start);
        for _ in 0..len {
            lightbox.next(&view);
        }
        prop_assert_eq!(lightbox.position(), Some(start));
    }

    /// URLs without an upload segment pass through the CDN rewrite untouched
    #[test]
    fn transform_leaves_foreign_urls(path in "[a-tv-z/]{0,30}", t in "[a-z_0-9,]{1,20}") {
        let url = format!("https://example.com/{}", path);
        prop_assert_eq!(transform_url(&url, &t), url);
    }
}
