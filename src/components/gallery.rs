//! Media Gallery Component
//!
//! Renders a filtered view in batches. A [`ProgressiveLoader`] decides how
//! many thumbnails are visible; a [`Lightbox`] tracks the selected item. Both
//! reconcile with the view whenever the page hands in a new one.

use dioxus::prelude::*;
use folio_core::{FilteredView, InteractionMode, Lightbox, MediaItem, ProgressiveLoader, Trigger};
use folio_ui::Spinner;

use super::{use_interaction_mode, LightboxOverlay, LoadTrigger, Thumbnail};
use crate::context::use_app;

const TRIGGER_ID: &str = "gallery-load-trigger";

#[component]
pub fn MediaGallery(
    view: ReadOnlySignal<FilteredView<MediaItem>>,
    #[props(default = "Nothing matches the current filters.".to_string())] empty_label: String,
) -> Element {
    let app = use_app();
    let gallery = app.gallery().clone();
    let trigger = Trigger::from(&gallery);
    let delay = gallery.load_delay();
    let mode = use_interaction_mode(gallery.mobile_breakpoint_px);

    let mut loader = use_signal(|| {
        let mut loader = ProgressiveLoader::from_config(&gallery);
        loader.track(&*view.peek());
        loader
    });
    let mut lightbox =
        use_signal(|| Lightbox::new(InteractionMode::default(), gallery.navigation_hints));

    // New filter results: back to the first batch, drop a stale selection
    use_effect(move || {
        let view = view.read();
        if loader.write().track(&*view) {
            tracing::debug!(total = view.len(), "Gallery view changed");
        }
        lightbox.write().sync(&*view);
    });

    use_effect(move || {
        let mode = mode();
        lightbox.write().set_mode(mode);
    });

    let on_intersect = move |(intersecting, ratio): (bool, f64)| {
        let Some(ticket) = loader.write().observe(&trigger, intersecting, ratio) else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(delay).await;
            if !loader.write().commit(ticket) {
                tracing::debug!("Discarded batch for a previous view");
            }
        });
    };

    let view_ref = view.read();
    if view_ref.is_empty() {
        return rsx! {
            p { class: "empty-state", "{empty_label}" }
        };
    }

    let state = loader.read();
    let visible = state.visible_count();
    let interactive = mode() == InteractionMode::Desktop;

    rsx! {
        div { class: "media-gallery",
            div { class: "gallery-grid",
                for (position, item) in view_ref.prefix(visible).enumerate() {
                    Thumbnail {
                        key: "{item.id}",
                        item: item.clone(),
                        position: position,
                        interactive: interactive,
                        on_open: move |position| {
                            lightbox.write().open(&*view.read(), position);
                        },
                    }
                }
            }

            // Unmounted while a batch is pending; remounted (re-armed) after
            if state.has_more() && !state.is_loading() {
                LoadTrigger {
                    key: "{visible}",
                    id: TRIGGER_ID,
                    trigger: trigger,
                    on_intersect: on_intersect,
                }
            }

            if state.is_loading() {
                Spinner { label: "Loading more..." }
            }

            p { class: "gallery-count", "Showing {visible} of {view_ref.len()}" }

            if lightbox.read().is_open() {
                LightboxOverlay { view: view, lightbox: lightbox }
            }
        }
    }
}
