//! Category Pills Component
//!
//! Horizontal row of selectable pills, used for blog tags and photo topics.

use dioxus::prelude::*;

use super::input::option_label;

#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    pub categories: Vec<String>,
    pub selected: String,
    pub on_select: EventHandler<String>,
    /// Text shown for the `all` pill
    #[props(default = "All".to_string())]
    pub all_label: String,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut tag = use_signal(|| "all".to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: tags(),
///         selected: tag(),
///         on_select: move |t| tag.set(t)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Category selection",
            for cat in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_selected = selected.eq_ignore_ascii_case(cat);
                    let on_select = props.on_select;
                    let text = option_label(cat, &props.all_label);
                    rsx! {
                        button {
                            key: "{cat}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(cat_clone.clone());
                            },
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillProps {
    pub label: String,
    #[props(default = false)]
    pub selected: bool,
    pub on_click: EventHandler<()>,
}

/// A single pill, for tag lists inside cards
#[component]
pub fn CategoryPill(props: CategoryPillProps) -> Element {
    rsx! {
        button {
            class: pill_class(props.selected),
            onclick: move |evt| {
                evt.stop_propagation();
                props.on_click.call(());
            },
            "{props.label}"
        }
    }
}

pub fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}
