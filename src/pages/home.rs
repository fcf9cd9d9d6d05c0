//! Home page - introduction, section links and the latest entries.

use dioxus::prelude::*;
use folio_core::{sort_by_date_desc, PortfolioEntry};
use folio_ui::Spinner;

use super::portfolio::EntryCard;
use crate::components::NavLocation;
use crate::context::use_app;

/// Entries shown under "Recent work"
const RECENT_ENTRIES: usize = 3;

fn latest(mut entries: Vec<PortfolioEntry>, count: usize) -> Vec<PortfolioEntry> {
    sort_by_date_desc(&mut entries);
    entries.truncate(count);
    entries
}

fn blurb(location: NavLocation) -> &'static str {
    match location {
        NavLocation::Home => "",
        NavLocation::Photography => "Street, travel and landscape photographs.",
        NavLocation::Portfolio => "Roles, projects and studies, searchable.",
        NavLocation::Timeline => "The same history, in date order.",
        NavLocation::Blog => "Notes on building things.",
        NavLocation::Skillset => "What I work with, weighted by use.",
    }
}

#[component]
pub fn Home() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let recent = use_resource(move || {
        let provider = provider.clone();
        async move {
            // Portfolio collections always resolve through the bundled fallback
            provider
                .fetch_portfolio()
                .await
                .map(|entries| latest(entries, RECENT_ENTRIES))
                .unwrap_or_default()
        }
    });

    let recent_list = match &*recent.read() {
        Some(entries) => rsx! {
            div { class: "card-list",
                for entry in entries.iter() {
                    EntryCard { key: "{entry.detail_path()}", entry: entry.clone() }
                }
            }
        },
        None => rsx! {
            Spinner {}
        },
    };

    rsx! {
        section { class: "hero",
            h1 { class: "page-title", "Folio" }
            p { class: "body-text tagline",
                "Photography, engineering work and writing in one place."
            }
        }

        div { class: "section-links",
            for location in NavLocation::ALL.into_iter().filter(|l| *l != NavLocation::Home) {
                Link { key: "{location.display_name()}", class: "card", to: location.route(),
                    h3 { class: "card-title", "{location.display_name()}" }
                    p { class: "card-summary", "{blurb(location)}" }
                }
            }
        }

        h2 { class: "section-header", "Recent work" }
        {recent_list}
    }
}
