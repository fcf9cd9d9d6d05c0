//! Blog page - post list with search and a tag filter.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::records::BlogPostSummary;
use folio_core::{FilteredView, SortDirection, ALL};
use folio_ui::{CategoryPills, LoadState, LoadStatus, SearchInput};

use crate::app::Route;
use crate::context::use_app;

/// Search, then keep posts carrying `tag`, newest first
fn visible_posts(
    source: Arc<[BlogPostSummary]>,
    text: &str,
    tag: &str,
) -> FilteredView<BlogPostSummary> {
    FilteredView::all(source)
        .search(text)
        .retain(|post| tag.eq_ignore_ascii_case(ALL) || post.has_tag(tag))
        .sorted_by_date(SortDirection::Descending)
}

#[component]
fn PostCard(post: BlogPostSummary) -> Element {
    let date = post.display_date();

    rsx! {
        Link { class: "card", to: Route::BlogPost { slug: post.slug.clone() },
            if let Some(cover) = &post.cover_image {
                img { class: "post-cover", src: "{cover}", alt: "", loading: "lazy" }
            }
            h3 { class: "card-title", "{post.title}" }
            if !date.is_empty() {
                p { class: "card-meta", "{date}" }
            }
            if !post.excerpt.is_empty() {
                p { class: "card-summary", "{post.excerpt}" }
            }
            if !post.tags.is_empty() {
                div { class: "tag-row",
                    for tag in post.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let posts = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_blog_posts().await }
    });
    let provider = app.provider.clone();
    let tags = use_resource(move || {
        let provider = provider.clone();
        async move { provider.fetch_blog_tags().await }
    });

    let mut text = use_signal(String::new);
    let mut tag = use_signal(|| ALL.to_string());

    let view = use_memo(move || {
        let source: Arc<[BlogPostSummary]> = match &*posts.read() {
            Some(Ok(list)) => list.as_slice().into(),
            _ => Arc::from(Vec::new()),
        };
        visible_posts(source, &text(), &tag())
    });

    // A failed tag listing only hides the pills
    let tag_options = match &*tags.read() {
        Some(Ok(list)) if !list.is_empty() => {
            let mut options = vec![ALL.to_string()];
            options.extend(list.iter().cloned());
            options
        }
        _ => Vec::new(),
    };

    let body = match &*posts.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading posts..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(format!("Could not load posts: {}", e)) }
        },
        Some(Ok(_)) if view.read().is_empty() => rsx! {
            p { class: "empty-state", "No posts found." }
        },
        Some(Ok(_)) => rsx! {
            div { class: "card-list",
                for post in view.read().iter() {
                    PostCard { key: "{post.slug}", post: post.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "blog",
            h1 { class: "page-title", "Blog" }

            div { class: "toolbar",
                SearchInput {
                    value: text(),
                    oninput: move |value| text.set(value),
                    placeholder: "Search posts...",
                }
            }
            if !tag_options.is_empty() {
                CategoryPills {
                    categories: tag_options,
                    selected: tag(),
                    on_select: move |value| tag.set(value),
                }
            }

            {body}
        }
    }
}
