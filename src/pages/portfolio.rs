//! Portfolio page - searchable work, project and education history.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{facet_values, CategoryFilter, GalleryQuery, PortfolioEntry, SortDirection, ALL};
use folio_ui::{CategoryPills, LoadState, LoadStatus, SearchInput};

use crate::context::use_app;

const KIND: &str = "kind";

/// Summary card linking to an entry's detail page
#[component]
pub fn EntryCard(entry: PortfolioEntry) -> Element {
    let period = entry.period();
    let skills: Vec<String> = entry.skills().map(str::to_string).collect();

    rsx! {
        Link { class: "card", to: entry.detail_path(),
            h3 { class: "card-title", "{entry.title}" }
            p { class: "card-meta",
                if let Some(company) = &entry.company {
                    "{company}"
                }
                if entry.company.is_some() && !period.is_empty() {
                    " · "
                }
                "{period}"
            }
            if let Some(summary) = &entry.summary {
                p { class: "card-summary", "{summary}" }
            }
            if !skills.is_empty() {
                div { class: "tag-row",
                    for skill in skills {
                        span { key: "{skill}", class: "tag", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let entries = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_portfolio().await }
    });

    let mut text = use_signal(String::new);
    let mut kind = use_signal(|| ALL.to_string());

    let source = use_memo(move || -> Arc<[PortfolioEntry]> {
        match &*entries.read() {
            Some(Ok(list)) => list.as_slice().into(),
            _ => Arc::from(Vec::new()),
        }
    });
    let kinds = use_memo(move || facet_values(&source.read()[..], KIND));

    let view = use_memo(move || {
        let query = GalleryQuery {
            text: text(),
            categories: CategoryFilter::new().select(KIND, kind()),
            sort: Some(SortDirection::Descending),
        };
        query.apply(&*source.read())
    });

    let body = match &*entries.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading portfolio..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(e.to_string()) }
        },
        Some(Ok(_)) if view.read().is_empty() => rsx! {
            p { class: "empty-state", "No entries match \"{text}\"." }
        },
        Some(Ok(_)) => rsx! {
            div { class: "card-list",
                for entry in view.read().iter() {
                    EntryCard { key: "{entry.detail_path()}", entry: entry.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "portfolio",
            h1 { class: "page-title", "Portfolio" }

            div { class: "toolbar",
                SearchInput {
                    value: text(),
                    oninput: move |value| text.set(value),
                    placeholder: "Search roles, projects, technologies...",
                }
            }
            CategoryPills {
                categories: kinds(),
                selected: kind(),
                on_select: move |value| kind.set(value),
            }

            {body}
        }
    }
}
