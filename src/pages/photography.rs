//! Photography page - the full photo collection.
//!
//! Free-text search plus year and topic dropdowns narrow the gallery. The
//! photo collection has a bundled fallback, so this page always has content.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{facet, facet_values, CategoryFilter, GalleryQuery, MediaItem, ALL};
use folio_ui::{Button, ButtonVariant, FacetSelect, LoadState, LoadStatus, SearchInput};

use crate::components::MediaGallery;
use crate::context::use_app;

#[component]
pub fn Photography() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let photos = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_photo_items().await }
    });

    let mut text = use_signal(String::new);
    let mut year = use_signal(|| ALL.to_string());
    let mut topic = use_signal(|| ALL.to_string());

    let source = use_memo(move || -> Arc<[MediaItem]> {
        match &*photos.read() {
            Some(Ok(items)) => items.as_slice().into(),
            _ => Arc::from(Vec::new()),
        }
    });
    let years = use_memo(move || facet_values(&source.read()[..], facet::YEAR));
    let topics = use_memo(move || facet_values(&source.read()[..], facet::TOPIC));

    let view = use_memo(move || {
        let query = GalleryQuery {
            text: text(),
            categories: CategoryFilter::new()
                .select(facet::YEAR, year())
                .select(facet::TOPIC, topic()),
            sort: None,
        };
        query.apply(&*source.read())
    });

    let filtered = !text.read().is_empty()
        || year.read().as_str() != ALL
        || topic.read().as_str() != ALL;

    let body = match &*photos.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading photos..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(e.to_string()) }
        },
        Some(Ok(_)) => rsx! {
            MediaGallery { view: view() }
        },
    };

    rsx! {
        section { class: "photography",
            h1 { class: "page-title", "Photography" }

            div { class: "toolbar",
                SearchInput {
                    value: text(),
                    oninput: move |value| text.set(value),
                    placeholder: "Search photos...",
                }
                FacetSelect {
                    label: "Year",
                    options: years(),
                    selected: year(),
                    on_change: move |value| year.set(value),
                    all_label: "All years",
                }
                FacetSelect {
                    label: "Topic",
                    options: topics(),
                    selected: topic(),
                    on_change: move |value| topic.set(value),
                    all_label: "All topics",
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: !filtered,
                    onclick: move |_| {
                        text.set(String::new());
                        year.set(ALL.to_string());
                        topic.set(ALL.to_string());
                    },
                    "Reset filters"
                }
            }

            {body}
        }
    }
}
