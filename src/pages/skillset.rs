//! Skillset page - word cloud of technologies from work and projects.

use dioxus::prelude::*;
use folio_core::skills::extract_skills_now;
use folio_core::wordcloud::{layout, CloudWord};
use folio_ui::{LoadState, LoadStatus};

use crate::context::use_app;

fn word_style(word: &CloudWord) -> String {
    format!(
        "font-size: {:.1}px; opacity: {:.2}; font-weight: {};",
        word.font_size_px, word.opacity, word.font_weight
    )
}

#[component]
pub fn Skillset() -> Element {
    let app = use_app();
    let provider = app.provider.clone();
    let cloud = use_resource(move || {
        let provider = provider.clone();
        async move {
            let (work, projects) = tokio::join!(provider.fetch_work(), provider.fetch_projects());
            let skills = extract_skills_now(&work?, &projects?);
            tracing::debug!(count = skills.len(), "Extracted skills");
            Ok::<_, folio_core::FolioError>(layout(&skills))
        }
    });

    let body = match &*cloud.read() {
        None => rsx! {
            LoadStatus { state: LoadState::Loading }
        },
        Some(Err(e)) => rsx! {
            LoadStatus { state: LoadState::Failed(e.to_string()) }
        },
        Some(Ok(words)) if words.is_empty() => rsx! {
            p { class: "empty-state", "No skills listed yet." }
        },
        Some(Ok(words)) => rsx! {
            div { class: "word-cloud",
                for word in words.iter() {
                    span {
                        key: "{word.word.text}",
                        class: "cloud-word",
                        style: word_style(word),
                        title: "{word.word.value}",
                        "{word.word.text}"
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "skillset",
            h1 { class: "page-title", "Skillset" }
            p { class: "body-text",
                "Technologies from work and side projects. Larger words show up more often; brighter ones were used more recently."
            }
            {body}
        }
    }
}
