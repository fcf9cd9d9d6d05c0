//! Bundled copies of the content endpoints.
//!
//! Compiled into the binary so the site renders even when the backend is
//! unreachable.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use crate::error::{FolioError, FolioResult};

pub const WORK_JSON: &str = include_str!("../../data/work.json");
pub const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
pub const EDUCATION_JSON: &str = include_str!("../../data/education.json");
pub const PHOTOS_JSON: &str = include_str!("../../data/photos.json");

/// Fallback payloads keyed by endpoint.
#[derive(Debug, Clone, Default)]
pub struct FallbackStore {
    entries: HashMap<Endpoint, Cow<'static, str>>,
}

impl FallbackStore {
    /// No fallbacks: every failure propagates
    pub fn empty() -> Self {
        Self::default()
    }

    /// The JSON shipped with the crate for the four content endpoints
    pub fn bundled() -> Self {
        let mut store = Self::empty();
        store.register(Endpoint::Work, WORK_JSON);
        store.register(Endpoint::Projects, PROJECTS_JSON);
        store.register(Endpoint::Education, EDUCATION_JSON);
        store.register(Endpoint::Photos, PHOTOS_JSON);
        store
    }

    pub fn register(&mut self, endpoint: Endpoint, json: impl Into<Cow<'static, str>>) {
        self.entries.insert(endpoint, json.into());
    }

    pub fn has(&self, endpoint: &Endpoint) -> bool {
        self.entries.contains_key(endpoint)
    }

    /// Raw JSON text registered for an endpoint
    pub fn raw(&self, endpoint: &Endpoint) -> Option<&str> {
        self.entries.get(endpoint).map(|json| json.as_ref())
    }

    /// Decode the fallback for an endpoint
    pub fn load<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> FolioResult<T> {
        let raw = self
            .raw(endpoint)
            .ok_or_else(|| FolioError::NoFallback(endpoint.path()))?;
        Ok(serde_json::from_str(raw)?)
    }
}
