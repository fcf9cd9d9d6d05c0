use dioxus::prelude::*;

use crate::components::Shell;
use crate::context::{AppContext, Resources};
use crate::pages::{
    Blog, BlogPost, EducationDetail, Home, Photography, Portfolio, ProjectDetail, Skillset,
    Timeline, WorkDetail,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with recent photos
/// - `/photography` - Photo gallery with search and year/topic filters
/// - `/portfolio` - Searchable work, project and education history
/// - `/timeline` - The same history in date order
/// - `/work/:company/:title`, `/projects/:slug`, `/education/:slug` - Entry
///   detail with its CDN image folder as a gallery
/// - `/blog`, `/blog/:slug` - Posts with a tag filter, and one post
/// - `/skillset` - Skills word cloud
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/photography")]
        Photography {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/timeline")]
        Timeline {},
        #[route("/work/:company/:title")]
        WorkDetail { company: String, title: String },
        #[route("/projects/:slug")]
        ProjectDetail { slug: String },
        #[route("/education/:slug")]
        EducationDetail { slug: String },
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
        #[route("/skillset")]
        Skillset {},
}

/// Root application component.
///
/// Provides global styles, the app context, and routing.
#[component]
pub fn App() -> Element {
    let resources = use_context::<Resources>();
    use_context_provider(move || AppContext::new(resources));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
