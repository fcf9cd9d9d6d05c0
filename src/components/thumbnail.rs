use dioxus::prelude::*;
use folio_core::MediaItem;

/// One gallery tile.
///
/// Interactive tiles open the lightbox; inline tiles (narrow windows) show the
/// full-resolution image in place instead.
#[component]
pub fn Thumbnail(
    item: MediaItem,
    position: usize,
    #[props(default = true)] interactive: bool,
    on_open: EventHandler<usize>,
) -> Element {
    let caption = item.title().to_string();

    if !interactive {
        return rsx! {
            figure { class: "thumbnail inline",
                img {
                    src: "{item.full_res_url}",
                    alt: "{item.alt_text}",
                    loading: "lazy",
                }
                if !caption.is_empty() {
                    figcaption { "{caption}" }
                }
            }
        };
    }

    rsx! {
        button {
            class: "thumbnail",
            r#type: "button",
            title: "{caption}",
            onclick: move |_| on_open.call(position),
            img {
                src: "{item.thumbnail_url}",
                alt: "{item.alt_text}",
                loading: "lazy",
            }
        }
    }
}
