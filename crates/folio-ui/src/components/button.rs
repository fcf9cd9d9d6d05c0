//! Button Components
//!
//! - Primary: main actions
//! - Ghost: header toggles and secondary actions
//! - Link: text-only, used for "back" and tag links

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Join a base class with optional extra classes
pub fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Extra CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| theme.toggle(),
///         "Theme"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| {
                evt.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with an X glyph
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_class_skips_blank_extra() {
        assert_eq!(join_class("icon-btn", None), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("  ")), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}
