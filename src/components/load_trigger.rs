//! Load Trigger Component
//!
//! A sentinel placed after the last visible thumbnail. An
//! IntersectionObserver reports `(isIntersecting, intersectionRatio)` back
//! through the eval channel; the gallery decides whether that starts a load.
//!
//! The gallery unmounts the trigger while a batch is pending and keys it by
//! the visible count, so each settled load mounts a fresh observer that
//! reports the sentinel's current state.

use dioxus::prelude::*;
use folio_core::Trigger;

fn observer_script(id: &str, trigger: &Trigger) -> String {
    format!(
        r#"
const el = document.getElementById("{id}");
if (el) {{
  const observer = new IntersectionObserver((entries) => {{
    if (!document.body.contains(el)) {{
      observer.disconnect();
      return;
    }}
    for (const entry of entries) {{
      dioxus.send([entry.isIntersecting, entry.intersectionRatio]);
    }}
  }}, {{ rootMargin: "{margin}", threshold: {threshold} }});
  observer.observe(el);
}}
await new Promise(() => {{}});
"#,
        id = id,
        margin = trigger.root_margin_css(),
        threshold = trigger.threshold,
    )
}

#[component]
pub fn LoadTrigger(
    id: String,
    trigger: Trigger,
    on_intersect: EventHandler<(bool, f64)>,
) -> Element {
    let script = observer_script(&id, &trigger);

    rsx! {
        div {
            id: "{id}",
            class: "load-trigger",
            "aria-hidden": "true",
            onmounted: move |_| {
                let script = script.clone();
                async move {
                    let mut eval = document::eval(&script);
                    while let Ok((intersecting, ratio)) = eval.recv::<(bool, f64)>().await {
                        on_intersect.call((intersecting, ratio));
                    }
                }
            },
        }
    }
}
