//! UI Components for Folio.
//!
//! Shell chrome plus the media gallery: thumbnails, the load-more trigger
//! and the lightbox overlay.

mod gallery;
mod lightbox;
mod load_trigger;
mod shell;
mod thumbnail;
mod viewport;

pub use gallery::MediaGallery;
pub use lightbox::LightboxOverlay;
pub use load_trigger::LoadTrigger;
pub use shell::{NavLocation, Shell};
pub use thumbnail::Thumbnail;
pub use viewport::use_interaction_mode;
