//! Folio Core Library
//!
//! Media gallery and filter pipeline for a portfolio site.
//!
//! ## Overview
//!
//! Content flows through four stages:
//!
//! ```text
//! DataProvider ──▶ FilteredView ──▶ ProgressiveLoader ──▶ visible slice
//!                       │
//!                       └──────────▶ Lightbox (whole filtered set)
//! ```
//!
//! - **Data Provider**: fetches JSON collections, falling back to bundled
//!   copies when the backend fails
//! - **Filter/Search Engine**: case-insensitive text search, categorical
//!   facets combined with AND, explicit date sort
//! - **Progressive Loader**: reveals items in fixed-size batches
//! - **Lightbox**: wrapping navigation with placeholder to full-resolution swap
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use folio_core::{DataProvider, FolioConfig, GalleryQuery, ProgressiveLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FolioConfig::load(None)?;
//!     let provider = DataProvider::from_config(&config)?;
//!
//!     let photos: Arc<[_]> = provider.fetch_photo_items().await?.into();
//!     let view = GalleryQuery { text: "harbour".into(), ..Default::default() }.apply(&photos);
//!
//!     let mut loader = ProgressiveLoader::from_config(&config.gallery);
//!     loader.track(&view);
//!     for photo in view.prefix(loader.visible_count()) {
//!         println!("{}", photo.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cdn;
pub mod config;
pub mod error;
pub mod filter;
pub mod lightbox;
pub mod loader;
pub mod provider;
pub mod records;
pub mod skills;
pub mod slug;
pub mod types;
pub mod wordcloud;

// Re-exports
pub use cdn::{transform_url, ImageVariant};
pub use config::{FolioConfig, GalleryConfig};
pub use error::{FolioError, FolioResult};
pub use filter::{
    facet_values, filter, filter_categories, matches_query, sort_by_date, sort_by_date_desc,
    CategoryFilter, FilteredView, GalleryQuery, Searchable, SortDirection, ALL,
};
pub use lightbox::{CursorHint, Half, InteractionMode, Lightbox, LightboxFrame, LoadToken, Phase};
pub use loader::{LoadTicket, ProgressiveLoader, Trigger};
pub use provider::{
    Collection, DataProvider, Endpoint, FallbackStore, HttpTransport, RequestSequencer, Transport,
};
pub use records::{BlogPost, BlogPostSummary, CdnImage, MediaLink, Photo, PhotoData, PortfolioEntry};
pub use slug::slugify;
pub use types::{facet, Identified, MediaItem};
