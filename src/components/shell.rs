//! Shell Component
//!
//! Header with the site title, nav links, a sidebar toggle and a theme
//! toggle. Both toggles live in `AppContext` so every page sees them.

use dioxus::prelude::*;
use folio_ui::IconButton;

use crate::app::Route;
use crate::context::{use_app, Theme};

/// Top-level sections reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Photography,
    Portfolio,
    Timeline,
    Blog,
    Skillset,
}

impl NavLocation {
    pub const ALL: [NavLocation; 6] = [
        NavLocation::Home,
        NavLocation::Photography,
        NavLocation::Portfolio,
        NavLocation::Timeline,
        NavLocation::Blog,
        NavLocation::Skillset,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Photography => "Photography",
            NavLocation::Portfolio => "Portfolio",
            NavLocation::Timeline => "Timeline",
            NavLocation::Blog => "Blog",
            NavLocation::Skillset => "Skillset",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Photography => Route::Photography {},
            NavLocation::Portfolio => Route::Portfolio {},
            NavLocation::Timeline => Route::Timeline {},
            NavLocation::Blog => Route::Blog {},
            NavLocation::Skillset => Route::Skillset {},
        }
    }
}

fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

#[component]
fn NavLinks() -> Element {
    rsx! {
        for location in NavLocation::ALL {
            Link {
                key: "{location.display_name()}",
                class: "nav-link",
                active_class: "active",
                to: location.route(),
                "{location.display_name()}"
            }
        }
    }
}

/// Layout wrapping every route
#[component]
pub fn Shell() -> Element {
    let app = use_app();
    let mut theme = app.theme;
    let mut sidebar_open = app.sidebar_open;

    rsx! {
        div { class: "app", "data-theme": theme().as_str(),
            header { class: "site-header",
                IconButton {
                    aria_label: "Toggle navigation",
                    class: "sidebar-toggle",
                    onclick: move |_| sidebar_open.set(!sidebar_open()),
                    "☰"
                }
                Link { class: "site-title", to: Route::Home {}, "Folio" }
                nav { class: "header-nav", NavLinks {} }
                IconButton {
                    aria_label: "Toggle theme",
                    class: "theme-toggle",
                    onclick: move |_| {
                        let next = theme().toggled();
                        tracing::debug!(theme = next.as_str(), "Theme changed");
                        theme.set(next);
                    },
                    "{theme_icon(theme())}"
                }
            }

            if sidebar_open() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| sidebar_open.set(false),
                    aside { class: "sidebar",
                        nav { class: "sidebar-nav", NavLinks {} }
                    }
                }
            }

            main { class: "page", Outlet::<Route> {} }
        }
    }
}
