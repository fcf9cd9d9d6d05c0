//! Data provider tests against a real HTTP transport
//!
//! A throwaway TCP listener plays the backend so the `reqwest` transport,
//! status handling and fallback run end to end.

use std::time::Duration;

use folio_core::provider::{Endpoint, RequestSequencer};
use folio_core::{
    DataProvider, FallbackStore, FolioConfig, FolioError, HttpTransport, PhotoData, PortfolioEntry,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("folio_core=debug")
        .try_init();
}

/// Serve one canned HTTP response per connection, forever
async fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn provider(base: String) -> DataProvider<HttpTransport> {
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    DataProvider::new(Some(base), transport, FallbackStore::bundled())
}

fn bundled_work() -> Vec<PortfolioEntry> {
    FallbackStore::bundled().load(&Endpoint::Work).unwrap()
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_remote_payload_is_used() {
    init_tracing();
    let base = serve("200 OK", r#"[{"title":"Remote role","company":"Remote Co"}]"#).await;
    let work = provider(base).fetch_work().await.unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].company.as_deref(), Some("Remote Co"));
}

#[tokio::test]
async fn test_one_malformed_record_keeps_remote_payload() {
    init_tracing();
    let base = serve(
        "200 OK",
        r#"{"photos":[{"id":"r1","src":"https://x/upload/r1.jpg","alt":null},{"id":"r2","src":"https://x/upload/r2.jpg","width":"1200"}]}"#,
    )
    .await;
    let photos = provider(base).fetch_photos().await.unwrap();
    let ids: Vec<Option<&str>> = photos.photos.iter().map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("r1"), Some("r2")]);
    assert_eq!(photos.photos[1].width, Some(1200));
}

#[tokio::test]
async fn test_blog_tags_from_remote() {
    let base = serve("200 OK", r#"["rust","photography"]"#).await;
    let tags = provider(base).fetch_blog_tags().await.unwrap();
    assert_eq!(tags, vec!["rust", "photography"]);
}

// ============================================================================
// Fallback Path
// ============================================================================

#[tokio::test]
async fn test_server_error_falls_back() {
    init_tracing();
    let base = serve("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let work = provider(base).fetch_work().await.unwrap();
    let titles: Vec<String> = work.into_iter().map(|e| e.title).collect();
    let expected: Vec<String> = bundled_work().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_wrong_shape_falls_back() {
    let base = serve("200 OK", r#"{"unexpected":"object"}"#).await;
    let photos = provider(base).fetch_photos().await.unwrap();
    let bundled: PhotoData = FallbackStore::bundled().load(&Endpoint::Photos).unwrap();
    assert_eq!(photos, bundled);
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    // Bind then drop, leaving a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let education = provider(base).fetch_education().await.unwrap();
    assert!(!education.is_empty());
}

#[tokio::test]
async fn test_missing_base_url_from_config() {
    let config = FolioConfig::default();
    let provider = DataProvider::from_config(&config).unwrap();
    assert!(provider.base_url().is_none());
    let projects = provider.fetch_projects().await.unwrap();
    assert!(!projects.is_empty());
}

// ============================================================================
// No Fallback
// ============================================================================

#[tokio::test]
async fn test_blog_error_surfaces_status() {
    let base = serve("404 Not Found", r#"{"error":"no such post"}"#).await;
    let err = provider(base).fetch_blog_post("missing").await.unwrap_err();
    match err {
        FolioError::HttpStatus { status, url, .. } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/blog/missing"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_folder_listing_error_surfaces() {
    let base = serve("503 Service Unavailable", "{}").await;
    let err = provider(base)
        .fetch_folder_images("portfolio/work/casa")
        .await
        .unwrap_err();
    assert!(err.is_remote());
}

// ============================================================================
// Sequencing
// ============================================================================

#[tokio::test]
async fn test_latest_request_wins() {
    let base = serve("200 OK", r#"["a"]"#).await;
    let provider = provider(base);
    let seq = RequestSequencer::new();

    let first = provider.fetch_latest::<Vec<String>>(&seq, &Endpoint::BlogTags);
    let second = provider.fetch_latest::<Vec<String>>(&seq, &Endpoint::BlogTags);
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), None);
    assert_eq!(second.unwrap(), Some(vec!["a".to_string()]));
}
