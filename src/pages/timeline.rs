//! Timeline page - work, projects and education in date order.
//!
//! Every entry links to its detail page. A toggle flips between newest and
//! oldest first; undated entries stay at the end either way.

use dioxus::prelude::*;
use folio_core::{sort_by_date, PortfolioEntry, SortDirection};
use folio_ui::{Button, ButtonVariant, LoadState, LoadStatus};

use crate::context::use_app;

fn ordered(entries: &[PortfolioEntry], direction: SortDirection) -> Vec<PortfolioEntry> {
    let mut entries = entries.to_vec();
    sort_by_date(&mut entries, direction);
    entries
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Descending => "▾ date",
        SortDirection::Ascending => "▴ date",
    }
}

#[component]
fn Milestone(entry: PortfolioEntry) -> Element {
    let year = entry.milestone_year().unwrap_or_default();
    let path = entry.detail_path();

    rsx! {
        li { class: "milestone",
            span { class: "milestone-year", "{year}" }
            span { class: "milestone-dot" }
            div { class: "milestone-body",
                Link { class: "milestone-title", to: path.clone(), "{entry.title}" }
                p { class: "card-meta", "{entry.organization()}" }
                p { class: "card-summary", "{entry.description()}" }
            }
            Link { class: "milestone-open", to: path, "+" }
        }
    }
}

#[component]
pub fn Timeline() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let entries = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_timeline().await }
    });

    let mut direction = use_signal(SortDirection::default);

    let milestones = use_memo(move || match &*entries.read() {
        Some(Ok(list)) => ordered(list, direction()),
        _ => Vec::new(),
    });

    let body = match &*entries.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading timeline..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(e.to_string()) }
        },
        Some(Ok(_)) => rsx! {
            ol { class: "timeline",
                for entry in milestones.read().iter() {
                    Milestone { key: "{entry.detail_path()}", entry: entry.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "timeline-page",
            h1 { class: "page-title", "Timeline" }
            p { class: "body-text",
                "Roles, studies and projects in order. Select any entry for its details."
            }

            div { class: "toolbar timeline-toolbar",
                h2 { class: "section-header", "Career milestones" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| direction.set(direction().reversed()),
                    "{direction_label(direction())}"
                }
            }

            {body}
        }
    }
}
