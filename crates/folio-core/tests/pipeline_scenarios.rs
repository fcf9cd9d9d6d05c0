//! End-to-end scenarios through the gallery pipeline
//!
//! Each test drives provider, filter, loader and lightbox the way the
//! desktop gallery does, without a UI.

use std::sync::Arc;
use std::time::Duration;

use folio_core::provider::Endpoint;
use folio_core::{
    facet, CategoryFilter, DataProvider, FallbackStore, FilteredView, FolioError, FolioResult,
    GalleryQuery, Lightbox, MediaItem, PortfolioEntry, ProgressiveLoader, Transport,
};
use serde_json::Value;

fn items(n: usize) -> Arc<[MediaItem]> {
    (0..n)
        .map(|i| {
            MediaItem::new(
                format!("photo-{i:02}"),
                format!("https://cdn.test/upload/t/{i}.jpg"),
                format!("https://cdn.test/upload/f/{i}.jpg"),
                format!("Photo number {i}"),
            )
            .with_category(facet::YEAR, if i % 2 == 0 { "2023" } else { "2022" })
        })
        .collect()
}

/// Never answers; the request is cut off by its timeout
struct Stalled {
    timeout: Duration,
}

impl Transport for Stalled {
    async fn get_json(&self, url: &str) -> FolioResult<Value> {
        match tokio::time::timeout(self.timeout, std::future::pending::<()>()).await {
            Ok(()) => unreachable!("pending never resolves"),
            Err(_) => Err(FolioError::Network(format!("operation timed out: {}", url))),
        }
    }
}

// ============================================================================
// Progressive loading
// ============================================================================

#[test]
fn test_forty_five_items_reveal_in_batches_of_twenty() {
    let view = FilteredView::all(items(45));
    let mut loader = ProgressiveLoader::new(20);
    loader.track(&view);

    let mut seen = vec![loader.visible_count()];
    while let Some(ticket) = loader.request_more() {
        assert!(loader.commit(ticket));
        seen.push(loader.visible_count());
    }

    assert_eq!(seen, vec![20, 40, 45]);
    assert!(!loader.has_more());
    assert_eq!(view.prefix(loader.visible_count()).count(), 45);
}

#[test]
fn test_filter_change_resets_visible_count() {
    let source = items(45);
    let mut loader = ProgressiveLoader::new(20);

    let all = GalleryQuery::default().apply(&source);
    loader.track(&all);
    let ticket = loader.request_more().unwrap();
    assert!(loader.commit(ticket));
    assert_eq!(loader.visible_count(), 40);

    let pending = loader.request_more().unwrap();
    let query = GalleryQuery {
        categories: CategoryFilter::new().select(facet::YEAR, "2023"),
        ..Default::default()
    };
    let narrowed = query.apply(&source);
    assert!(loader.track(&narrowed));
    assert_eq!(narrowed.len(), 23);
    assert_eq!(loader.visible_count(), 20);
    assert!(!loader.commit(pending), "load started before the filter change is dropped");
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_company_search_finds_single_entry() {
    let entries: Vec<PortfolioEntry> = serde_json::from_value(serde_json::json!([
        {"title": "Manufacturing Software Engineer", "company": "Tesla", "dateFrom": "2022"},
        {"title": "Computational Designer", "company": "Studio Meridian", "dateFrom": "2019"},
        {"title": "Consultant", "company": null}
    ]))
    .unwrap();

    let found = folio_core::filter(&entries, "tesla");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].company.as_deref(), Some("Tesla"));
}

// ============================================================================
// Lightbox
// ============================================================================

#[test]
fn test_three_right_clicks_from_index_two_wraps_to_zero() {
    let view = FilteredView::all(items(5));
    let mut lightbox = Lightbox::default();
    assert!(lightbox.open(&view, 2));

    for _ in 0..3 {
        lightbox.click(&view, 600.0, 800.0);
    }
    assert_eq!(lightbox.position(), Some(0));
    assert_eq!(lightbox.current_id(), Some("photo-00"));
}

#[test]
fn test_lightbox_spans_beyond_visible_batch() {
    let view = FilteredView::all(items(45));
    let loader = ProgressiveLoader::with_total(20, view.len());
    let mut lightbox = Lightbox::default();

    lightbox.open(&view, loader.visible_count() - 1);
    lightbox.next(&view);
    assert_eq!(lightbox.position(), Some(20));
    assert!(lightbox.frame(&view).is_some());
}

#[test]
fn test_lightbox_closes_when_filter_excludes_item() {
    let source = items(10);
    let mut lightbox = Lightbox::default();
    let all = GalleryQuery::default().apply(&source);
    lightbox.open_id(&all, "photo-03");

    let only_2023 = GalleryQuery {
        categories: CategoryFilter::new().select(facet::YEAR, "2023"),
        ..Default::default()
    }
    .apply(&source);
    assert!(lightbox.sync(&only_2023));
    assert!(!lightbox.is_open());
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_work_timeout_returns_bundled_work_verbatim() {
    let provider = DataProvider::new(
        Some("https://api.test".to_string()),
        Stalled {
            timeout: Duration::from_secs(10),
        },
        FallbackStore::bundled(),
    );

    let work = provider.fetch_work().await.expect("fallback absorbs the timeout");
    let bundled: Vec<PortfolioEntry> = FallbackStore::bundled().load(&Endpoint::Work).unwrap();

    assert_eq!(work.len(), bundled.len());
    for (got, want) in work.iter().zip(&bundled) {
        assert_eq!(got.title, want.title);
        assert_eq!(got.company, want.company);
        assert_eq!(got.tech_stack, want.tech_stack);
    }
}

#[tokio::test(start_paused = true)]
async fn test_photo_gallery_from_fallback() {
    let provider = DataProvider::new(
        Some("https://api.test".to_string()),
        Stalled {
            timeout: Duration::from_secs(10),
        },
        FallbackStore::bundled(),
    );

    let photos: Arc<[MediaItem]> = provider.fetch_photo_items().await.unwrap().into();
    let view = GalleryQuery::default().apply(&photos);
    let mut loader = ProgressiveLoader::new(20);
    loader.track(&view);

    assert!(view.len() > 20);
    assert_eq!(loader.visible_count(), 20);
    assert!(loader.has_more());
}
