//! Viewport width watcher.

use dioxus::prelude::*;
use folio_core::InteractionMode;

/// Reports `window.innerWidth` now and after every resize
const WIDTH_WATCHER_JS: &str = r#"
dioxus.send(window.innerWidth);
window.addEventListener("resize", () => dioxus.send(window.innerWidth));
await new Promise(() => {});
"#;

/// Desktop or inline mode, following the window width across `breakpoint_px`
pub fn use_interaction_mode(breakpoint_px: u32) -> Signal<InteractionMode> {
    let mut mode = use_signal(InteractionMode::default);

    use_future(move || async move {
        let mut eval = document::eval(WIDTH_WATCHER_JS);
        while let Ok(width) = eval.recv::<f64>().await {
            let next = InteractionMode::from_viewport_width(width, breakpoint_px);
            if *mode.peek() != next {
                tracing::debug!(width, ?next, "Interaction mode changed");
                mode.set(next);
            }
        }
    });

    mode
}
