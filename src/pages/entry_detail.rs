//! Entry detail pages - one work, project or education entry.
//!
//! The entry's `imagesPath` names a CDN folder; its listing becomes a
//! gallery, with subfolder pills when the listing spans several folders.
//! Folder listings have no bundled fallback, so errors show inline.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::provider::{Endpoint, RequestSequencer};
use folio_core::{
    facet, facet_values, CategoryFilter, CdnImage, GalleryQuery, MediaItem, PortfolioEntry, ALL,
};
use folio_ui::{CategoryPills, LoadState, LoadStatus};

use crate::app::Route;
use crate::components::MediaGallery;
use crate::context::use_app;

#[component]
pub fn WorkDetail(company: String, title: String) -> Element {
    rsx! {
        EntryDetail { path: format!("/work/{}/{}", company, title) }
    }
}

#[component]
pub fn ProjectDetail(slug: String) -> Element {
    rsx! {
        EntryDetail { path: format!("/projects/{}", slug) }
    }
}

#[component]
pub fn EducationDetail(slug: String) -> Element {
    rsx! {
        EntryDetail { path: format!("/education/{}", slug) }
    }
}

#[component]
fn EntryDetail(path: ReadOnlySignal<String>) -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let entries = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_portfolio().await }
    });

    let entry = use_memo(move || match &*entries.read() {
        Some(Ok(list)) => list.iter().find(|e| e.detail_path() == *path.read()).cloned(),
        _ => None,
    });

    match &*entries.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(e.to_string()) }
        },
        Some(Ok(_)) => match entry() {
            Some(entry) => rsx! {
                EntryHeader { entry: entry.clone() }
                FolderGallery { folder: entry.images_path }
            },
            None => rsx! {
                div { class: "empty-state",
                    p { "Nothing lives at {path}." }
                    Link { class: "btn-link", to: Route::Portfolio {}, "Back to portfolio" }
                }
            },
        },
    }
}

#[component]
fn EntryHeader(entry: PortfolioEntry) -> Element {
    let period = entry.period();
    let skills: Vec<String> = entry.skills().map(str::to_string).collect();

    rsx! {
        header { class: "entry-header",
            Link { class: "btn-link", to: Route::Portfolio {}, "← Portfolio" }
            h1 { class: "page-title", "{entry.title}" }
            p { class: "card-meta",
                if let Some(company) = &entry.company {
                    "{company} "
                }
                "{period}"
            }
            if let Some(summary) = &entry.summary {
                p { class: "card-summary", "{summary}" }
            }
            if !entry.details.is_empty() {
                ul { class: "entry-details",
                    for detail in entry.details.iter() {
                        li { key: "{detail}", "{detail}" }
                    }
                }
            }
            if !skills.is_empty() {
                div { class: "tag-row",
                    for skill in skills {
                        span { key: "{skill}", class: "tag", "{skill}" }
                    }
                }
            }
            div { class: "entry-links",
                if let Some(url) = &entry.url {
                    a { class: "btn-link", href: "{url}", target: "_blank", "Visit" }
                }
                if let Some(github) = &entry.github {
                    a { class: "btn-link", href: "{github}", target: "_blank", "Source" }
                }
                for link in entry.media.iter() {
                    a {
                        key: "{link.url}",
                        class: "btn-link",
                        href: "{link.url}",
                        target: "_blank",
                        if link.name.is_empty() { "Media" } else { "{link.name}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FolderGallery(folder: ReadOnlySignal<String>) -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let sequencer = use_hook(|| Arc::new(RequestSequencer::new()));

    let images = use_resource(move || {
        let provider = provider.clone();
        let sequencer = sequencer.clone();
        let folder = folder();
        async move {
            if folder.trim().is_empty() {
                return Ok(Some(Vec::new()));
            }
            provider
                .fetch_latest::<Vec<CdnImage>>(&sequencer, &Endpoint::FolderImages(folder))
                .await
        }
    });

    let mut subfolder = use_signal(|| ALL.to_string());

    let source = use_memo(move || -> Arc<[MediaItem]> {
        match &*images.read() {
            Some(Ok(Some(list))) => list.iter().map(CdnImage::to_media_item).collect(),
            _ => Arc::from(Vec::new()),
        }
    });
    let folders = use_memo(move || facet_values(&source.read()[..], facet::FOLDER));

    let view = use_memo(move || {
        let query = GalleryQuery {
            text: String::new(),
            categories: CategoryFilter::new().select(facet::FOLDER, subfolder()),
            sort: None,
        };
        query.apply(&*source.read())
    });

    let body = match &*images.read() {
        None | Some(Ok(None)) => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading images..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(format!("Could not load images: {}", e)) }
        },
        Some(Ok(Some(_))) => rsx! {
            if folders.read().len() > 2 {
                CategoryPills {
                    categories: folders(),
                    selected: subfolder(),
                    on_select: move |value| subfolder.set(value),
                }
            }
            MediaGallery { view: view(), empty_label: "No images for this entry yet." }
        },
    };

    rsx! {
        section { class: "entry-gallery",
            h2 { class: "section-header", "Gallery" }
            {body}
        }
    }
}
