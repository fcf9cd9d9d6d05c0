//! HTTP transport for the data provider.
//!
//! The provider is generic over [`Transport`] so tests can swap in canned or
//! failing transports without a server.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::error::{FolioError, FolioResult};

/// Fetches a JSON document from an absolute URL.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = FolioResult<Value>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> FolioResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FolioError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> FolioResult<Value> {
        tracing::debug!("Fetching from URL: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("API error: {} for {}", status, url);
            return Err(FolioError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
