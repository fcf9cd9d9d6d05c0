//! Load Status Component
//!
//! Spinner with a label while content loads, inline message when a fetch
//! without a bundled fallback fails.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Shown inline; there is no retry
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// From a fetch result, keeping only the error text
    pub fn from_result<T, E: std::fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => LoadState::Ready,
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LoadStatusProps {
    pub state: LoadState,
    /// Label next to the spinner
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

/// Renders nothing once ready
#[component]
pub fn LoadStatus(props: LoadStatusProps) -> Element {
    match props.state {
        LoadState::Loading => rsx! {
            Spinner { label: props.label }
        },
        LoadState::Ready => rsx! {},
        LoadState::Failed(message) => rsx! {
            div { class: "load-error", role: "alert", "{message}" }
        },
    }
}

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "spinner-row",
            div { class: "spinner", "aria-hidden": "true" }
            if let Some(label) = label {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_from_result() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("offline".into());
        assert_eq!(LoadState::from_result(&ok), LoadState::Ready);
        assert_eq!(LoadState::from_result(&err), LoadState::Failed("offline".into()));
        assert!(LoadState::default().is_loading());
    }
}
