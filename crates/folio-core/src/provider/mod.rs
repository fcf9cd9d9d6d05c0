//! Data Provider: fetch-with-fallback access to the backend API.
//!
//! Content endpoints (`/data/*`) have a bundled copy. When the backend is
//! unreachable, answers with a non-2xx status, or returns a body that does
//! not decode, the provider logs a warning and hands back the bundled copy,
//! so callers of those endpoints always get a collection.
//!
//! Endpoints without a bundled copy (blog, CDN folder listings) return the
//! error for the caller to show inline.
//!
//! ## Usage
//!
//! ```ignore
//! let provider = DataProvider::from_config(&FolioConfig::load(None)?)?;
//! let photos = provider.fetch_photo_items().await?; // never fails on network errors
//! let posts = provider.fetch_blog_posts().await;    // may fail
//! ```

pub mod endpoint;
pub mod fallback;
pub mod sequence;
pub mod transport;

pub use endpoint::{Collection, Endpoint};
pub use fallback::FallbackStore;
pub use sequence::{RequestSequencer, RequestTicket};
pub use transport::{HttpTransport, Transport};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::FolioConfig;
use crate::error::{FolioError, FolioResult};
use crate::records::portfolio::EntryKind;
use crate::records::{decode_records, BlogPost, BlogPostSummary, CdnImage, PhotoData, PortfolioEntry};
use crate::types::MediaItem;

pub struct DataProvider<T: Transport = HttpTransport> {
    base_url: Option<String>,
    transport: T,
    fallbacks: FallbackStore,
}

impl DataProvider<HttpTransport> {
    /// HTTP provider with the bundled fallbacks
    pub fn from_config(config: &FolioConfig) -> FolioResult<Self> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::new(config.base_url(), transport, FallbackStore::bundled()))
    }
}

impl<T: Transport> DataProvider<T> {
    pub fn new(base_url: Option<String>, transport: T, fallbacks: FallbackStore) -> Self {
        if base_url.is_none() {
            tracing::error!(
                "API base URL is not configured; content will come from bundled data"
            );
        }
        Self {
            base_url,
            transport,
            fallbacks,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn fallbacks(&self) -> &FallbackStore {
        &self.fallbacks
    }

    /// Absolute URL for an endpoint
    pub fn url_for(&self, endpoint: &Endpoint) -> FolioResult<String> {
        let base = self.base_url.as_deref().ok_or(FolioError::MissingBaseUrl)?;
        Ok(format!("{}{}", base, endpoint.path()))
    }

    /// Fetch and decode without falling back
    pub async fn fetch_remote<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> FolioResult<R> {
        let url = self.url_for(endpoint)?;
        let value: Value = self.transport.get_json(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch an endpoint, substituting its bundled copy on any failure.
    ///
    /// Only endpoints without a registered fallback can return `Err`.
    pub async fn fetch_collection<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> FolioResult<R> {
        match self.fetch_remote(endpoint).await {
            Ok(value) => Ok(value),
            Err(err) if self.fallbacks.has(endpoint) => {
                tracing::warn!(
                    "Fetching {} failed ({}); using bundled fallback",
                    endpoint,
                    err
                );
                self.fallbacks.load(endpoint)
            }
            Err(err) => {
                tracing::warn!("Fetching {} failed: {}", endpoint, err);
                Err(err)
            }
        }
    }

    /// Like [`fetch_collection`](Self::fetch_collection), but resolves to
    /// `None` when a newer request was begun on `sequencer` meanwhile.
    pub async fn fetch_latest<R: DeserializeOwned>(
        &self,
        sequencer: &RequestSequencer,
        endpoint: &Endpoint,
    ) -> FolioResult<Option<R>> {
        let ticket = sequencer.begin();
        let result = self.fetch_collection(endpoint).await;
        if !sequencer.is_current(ticket) {
            tracing::debug!("Discarding stale response for {}", endpoint);
            return Ok(None);
        }
        result.map(Some)
    }

    /// Fetch a list endpoint, decoding each record on its own so one bad
    /// record does not discard the rest of the response.
    pub async fn fetch_records<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> FolioResult<Vec<R>> {
        let values: Vec<Value> = self.fetch_collection(endpoint).await?;
        Ok(decode_records(values))
    }

    async fn fetch_entries(&self, endpoint: Endpoint, kind: EntryKind) -> FolioResult<Vec<PortfolioEntry>> {
        let entries: Vec<PortfolioEntry> = self.fetch_records(&endpoint).await?;
        Ok(entries.into_iter().map(|e| e.with_kind(kind)).collect())
    }

    pub async fn fetch_work(&self) -> FolioResult<Vec<PortfolioEntry>> {
        self.fetch_entries(Endpoint::Work, EntryKind::Work).await
    }

    pub async fn fetch_projects(&self) -> FolioResult<Vec<PortfolioEntry>> {
        self.fetch_entries(Endpoint::Projects, EntryKind::Project).await
    }

    pub async fn fetch_education(&self) -> FolioResult<Vec<PortfolioEntry>> {
        self.fetch_entries(Endpoint::Education, EntryKind::Education).await
    }

    /// Work followed by projects, the combined set the search table shows
    pub async fn fetch_portfolio(&self) -> FolioResult<Vec<PortfolioEntry>> {
        let (work, projects) = tokio::join!(self.fetch_work(), self.fetch_projects());
        let mut entries = work?;
        entries.extend(projects?);
        Ok(entries)
    }

    /// Work, projects and education in one list, unsorted
    pub async fn fetch_timeline(&self) -> FolioResult<Vec<PortfolioEntry>> {
        let (work, projects, education) = tokio::join!(
            self.fetch_work(),
            self.fetch_projects(),
            self.fetch_education()
        );
        let mut entries = work?;
        entries.extend(projects?);
        entries.extend(education?);
        Ok(entries)
    }

    pub async fn fetch_photos(&self) -> FolioResult<PhotoData> {
        self.fetch_collection(&Endpoint::Photos).await
    }

    pub async fn fetch_photo_items(&self) -> FolioResult<Vec<MediaItem>> {
        Ok(self.fetch_photos().await?.to_media_items())
    }

    /// Any content collection as raw JSON
    pub async fn fetch_collection_value(&self, collection: Collection) -> FolioResult<Value> {
        self.fetch_collection(&collection.endpoint()).await
    }

    /// Images in a CDN folder. An empty path yields nothing without a request.
    pub async fn fetch_folder_images(&self, folder: &str) -> FolioResult<Vec<CdnImage>> {
        if folder.trim().is_empty() {
            tracing::warn!("fetch_folder_images called with an empty folder path");
            return Ok(Vec::new());
        }
        let mut images: Vec<CdnImage> = self
            .fetch_records(&Endpoint::FolderImages(folder.to_string()))
            .await?;
        images.retain(|image| !image.secure_url.is_empty());
        Ok(images)
    }

    pub async fn fetch_blog_posts(&self) -> FolioResult<Vec<BlogPostSummary>> {
        self.fetch_records(&Endpoint::BlogPosts).await
    }

    pub async fn fetch_blog_post(&self, slug: &str) -> FolioResult<BlogPost> {
        self.fetch_collection(&Endpoint::BlogPost(slug.to_string()))
            .await
    }

    pub async fn fetch_blog_posts_by_tag(&self, tag: &str) -> FolioResult<Vec<BlogPostSummary>> {
        self.fetch_records(&Endpoint::BlogTag(tag.to_string()))
            .await
    }

    pub async fn fetch_blog_tags(&self) -> FolioResult<Vec<String>> {
        self.fetch_collection(&Endpoint::BlogTags).await
    }
}

impl<T: Transport> std::fmt::Debug for DataProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}
