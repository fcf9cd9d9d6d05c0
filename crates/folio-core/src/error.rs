//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error {status} for {url}: {body}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The request never produced a response (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// No API base URL was configured, so no request could be made
    #[error("API base URL is not configured")]
    MissingBaseUrl,

    /// A response or bundled payload did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint has no bundled copy to fall back on
    #[error("No fallback registered for {0}")]
    NoFallback(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Whether this failure came from the remote side rather than local data.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FolioError::HttpStatus { .. } | FolioError::Network(_) | FolioError::MissingBaseUrl
        )
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FolioError::Network(format!("undecodable response body: {}", err))
        } else {
            FolioError::Network(err.to_string())
        }
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::HttpStatus {
            status: 503,
            url: "https://api.example.com/data/work".to_string(),
            body: "unavailable".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "HTTP error 503 for https://api.example.com/data/work: unavailable"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let folio_err: FolioError = io_err.into();
        assert!(matches!(folio_err, FolioError::Io(_)));
        assert!(!folio_err.is_remote());
    }

    #[test]
    fn test_remote_classification() {
        assert!(FolioError::MissingBaseUrl.is_remote());
        assert!(FolioError::Network("refused".into()).is_remote());
        assert!(!FolioError::NoFallback("/blog".into()).is_remote());
    }
}
