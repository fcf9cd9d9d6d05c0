//! Search box and facet dropdown.

use dioxus::prelude::*;
use folio_core::ALL;

#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    /// Called on every keystroke with the full text
    pub oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let has_text = !props.value.is_empty();

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if has_text {
                button {
                    class: "search-clear",
                    r#type: "button",
                    "aria-label": "Clear search",
                    onclick: move |_| props.oninput.call(String::new()),
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Display text for a facet option; the `all` sentinel gets `all_label`
pub fn option_label(value: &str, all_label: &str) -> String {
    if value.eq_ignore_ascii_case(ALL) {
        all_label.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FacetSelectProps {
    pub label: String,
    /// Facet values, `all` first
    pub options: Vec<String>,
    pub selected: String,
    pub on_change: EventHandler<String>,
    /// Text shown for the `all` option
    #[props(default = "All".to_string())]
    pub all_label: String,
}

/// Dropdown over a facet's values, e.g. years or topics
///
/// ```rust,ignore
/// rsx! {
///     FacetSelect {
///         label: "Year".to_string(),
///         options: facet_values(&photos, facet::YEAR),
///         selected: year(),
///         on_change: move |v| year.set(v),
///         all_label: "All years".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FacetSelect(props: FacetSelectProps) -> Element {
    rsx! {
        label { class: "facet-select",
            span { class: "input-label", "{props.label}" }
            select {
                class: "input-field",
                value: "{props.selected}",
                onchange: move |e| props.on_change.call(e.value()),
                for value in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.selected,
                        {option_label(value, &props.all_label)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_gets_friendly_label() {
        assert_eq!(option_label("all", "All years"), "All years");
        assert_eq!(option_label("ALL", "All"), "All");
        assert_eq!(option_label("2023", "All years"), "2023");
    }
}
