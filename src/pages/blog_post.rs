//! Blog post page.
//!
//! Post bodies arrive as rendered HTML from the backend.

use dioxus::prelude::*;
use folio_ui::{LoadState, LoadStatus};

use crate::app::Route;
use crate::context::use_app;

#[component]
pub fn BlogPost(slug: ReadOnlySignal<String>) -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let post = use_resource(move || {
        let provider = provider.clone();
        let slug = slug();
        async move { provider.fetch_blog_post(&slug).await }
    });

    let body = match &*post.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading, label: "Loading post..." }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(format!("Could not load this post: {}", e)) }
        },
        Some(Ok(post)) => {
            let summary = &post.summary;
            let date = summary.display_date();
            rsx! {
                header { class: "post-header",
                    if let Some(cover) = &summary.cover_image {
                        img { class: "post-cover", src: "{cover}", alt: "" }
                    }
                    h1 { class: "page-title", "{summary.title}" }
                    if !date.is_empty() {
                        p { class: "card-meta", "{date}" }
                    }
                    if !summary.tags.is_empty() {
                        div { class: "tag-row",
                            for tag in summary.tags.iter() {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }
                }
                article { class: "post-content", dangerous_inner_html: "{post.content}" }
            }
        }
    };

    rsx! {
        section { class: "blog-post",
            Link { class: "btn-link", to: Route::Blog {}, "← All posts" }
            {body}
        }
    }
}
