//! Lightbox Overlay Component
//!
//! Draws the frame produced by [`Lightbox::frame`]: the blurred thumbnail
//! right away, the full-resolution image faded in once its load event
//! arrives. Image events carry the [`LoadToken`](folio_core::LoadToken) of
//! the item they were issued for, so a late event from a previous item is
//! ignored.
//!
//! Clicking the left half of the stage goes back, the right half forward.
//! The stage width follows the window, so it is measured again on every
//! pointer move. Arrow keys navigate and Escape closes.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{FilteredView, Lightbox, MediaItem};
use folio_ui::{CloseButton, Spinner};

/// Classes for the placeholder and full-resolution layers. The placeholder
/// fades out as the full image fades in.
fn layer_classes(full_res_visible: bool) -> (&'static str, &'static str) {
    if full_res_visible {
        ("lightbox-placeholder hidden", "lightbox-full visible")
    } else {
        ("lightbox-placeholder", "lightbox-full")
    }
}

#[component]
pub fn LightboxOverlay(
    view: ReadOnlySignal<FilteredView<MediaItem>>,
    lightbox: Signal<Lightbox>,
) -> Element {
    let mut stage_width = use_signal(|| 0.0f64);
    let mut stage = use_signal(|| None::<Rc<MountedData>>);

    let measure = move || {
        if let Some(element) = stage() {
            spawn(async move {
                if let Ok(rect) = element.get_client_rect().await {
                    stage_width.set(rect.width());
                }
            });
        }
    };

    let on_key = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowLeft => {
            lightbox.write().prev(&*view.read());
        }
        Key::ArrowRight => {
            lightbox.write().next(&*view.read());
        }
        Key::Escape => lightbox.write().close(),
        _ => {}
    };

    let view_ref = view.read();
    let state = lightbox.read();
    let Some(frame) = state.frame(&view_ref) else {
        return rsx! {};
    };

    let token = frame.token;
    let full_res_url = frame.full_res_url.to_string();
    let failed_url = full_res_url.clone();
    let alt = frame.item.alt_text.clone();
    let title = frame.item.title().to_string();
    let counter = state.position().map(|p| p + 1).unwrap_or_default();
    let (placeholder_class, full_class) = layer_classes(frame.full_res_visible);

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            tabindex: "0",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_key,
            onclick: move |_| lightbox.write().close(),

            CloseButton { onclick: move |_| lightbox.write().close() }

            div {
                class: "lightbox-stage",
                style: "cursor: {frame.cursor.css()};",
                onmounted: move |evt| {
                    stage.set(Some(evt.data()));
                    measure();
                },
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    let offset = evt.element_coordinates().x;
                    lightbox.write().click(&*view.read(), offset, stage_width());
                },
                onmousemove: move |evt: MouseEvent| {
                    lightbox.write().hover(evt.element_coordinates().x, stage_width());
                    measure();
                },
                onmouseleave: move |_| lightbox.write().leave(),

                img {
                    class: placeholder_class,
                    src: "{frame.placeholder_url}",
                    alt: "{alt}",
                }
                img {
                    key: "{token}",
                    class: full_class,
                    src: "{full_res_url}",
                    alt: "{alt}",
                    onload: move |_| {
                        lightbox.write().full_res_loaded(token);
                    },
                    onerror: move |_| {
                        lightbox.write().full_res_failed(token, &failed_url);
                    },
                }
                if frame.show_spinner {
                    div { class: "lightbox-spinner", Spinner {} }
                }
            }

            p { class: "lightbox-caption",
                if !title.is_empty() {
                    span { class: "lightbox-title", "{title}" }
                }
                span { class: "lightbox-counter", "{counter} / {view_ref.len()}" }
            }
        }
    }
}
