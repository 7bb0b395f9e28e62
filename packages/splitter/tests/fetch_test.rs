//! Source mirroring against a mock HTTP server.
//!
//! The splitter uses a blocking client, so every call runs on the blocking
//! pool of the test runtime while wiremock serves from the async side.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tiku_splitter::config::{Layout, Source};
use tiku_splitter::fetch::{sync_source, update_sources, FetchOutcome, UpdateReport};
use tiku_splitter::http::{conditional_get, create_client, ConditionalResponse};
use tiku_splitter::{Result, SplitterError};

async fn sync(source: Source, root: PathBuf) -> Result<FetchOutcome> {
    tokio::task::spawn_blocking(move || {
        let client = create_client()?;
        sync_source(&client, &source, &Layout::new(root))
    })
    .await
    .unwrap()
}

async fn update(sources: Vec<Source>, root: PathBuf) -> Result<UpdateReport> {
    tokio::task::spawn_blocking(move || {
        let client = create_client()?;
        update_sources(&client, &sources, &Layout::new(root))
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_new_content_is_stored_with_etag() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oj.md"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"v1\"")
                .set_body_string("# Basics\nline\n"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let source = Source::new("oj", format!("{}/oj.md", mock_server.uri()));

    let outcome = sync(source, temp_dir.path().to_path_buf()).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Updated);
    let layout = Layout::new(temp_dir.path());
    assert_eq!(fs::read_to_string(layout.source_path("oj")).unwrap(), "# Basics\nline\n");
    assert_eq!(fs::read_to_string(layout.etag_path("oj")).unwrap(), "\"v1\"");
}

#[tokio::test]
async fn test_stored_etag_is_sent_and_304_is_unchanged() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oj.md"))
        .and(header("If-None-Match", "\"v1\""))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let layout = Layout::new(temp_dir.path());
    fs::create_dir_all(temp_dir.path().join("etag")).unwrap();
    fs::create_dir_all(temp_dir.path().join("original")).unwrap();
    fs::write(layout.etag_path("oj"), "\"v1\"\n").unwrap();
    fs::write(layout.source_path("oj"), "cached").unwrap();

    let source = Source::new("oj", format!("{}/oj.md", mock_server.uri()));
    let outcome = sync(source, temp_dir.path().to_path_buf()).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Unchanged);
    assert_eq!(fs::read_to_string(layout.source_path("oj")).unwrap(), "cached");
}

#[tokio::test]
async fn test_missing_etag_header_stores_content_only() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("text"))
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let source = Source::new("cf", format!("{}/cf.md", mock_server.uri()));

    let outcome = sync(source, temp_dir.path().to_path_buf()).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Updated);
    let layout = Layout::new(temp_dir.path());
    assert!(layout.source_path("cf").exists());
    assert!(!layout.etag_path("cf").exists());
}

#[tokio::test]
async fn test_unexpected_status_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let source = Source::new("oj", format!("{}/oj.md", mock_server.uri()));

    let result = sync(source, temp_dir.path().to_path_buf()).await;

    assert!(matches!(
        result,
        Err(SplitterError::UnexpectedStatus { status: 404, .. })
    ));
    assert!(!Layout::new(temp_dir.path()).source_path("oj").exists());
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/oj.md", mock_server.uri());
    let response = tokio::task::spawn_blocking(move || {
        let client = create_client()?;
        conditional_get(&client, &url, None)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        response,
        ConditionalResponse::Modified {
            body: "recovered".to_string(),
            etag: None,
        }
    );
}

#[tokio::test]
async fn test_update_reports_changed_sources() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oj.md"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cf.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# CF\n"))
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let sources = vec![
        Source::new("oj", format!("{}/oj.md", mock_server.uri())),
        Source::new("cf", format!("{}/cf.md", mock_server.uri())),
    ];

    let report = update(sources, temp_dir.path().to_path_buf()).await.unwrap();

    assert!(report.any_changed());
    assert_eq!(report.changed(), vec!["cf"]);
    assert_eq!(report.outcomes[0], ("oj".to_string(), FetchOutcome::Unchanged));
}

#[tokio::test]
async fn test_update_rejects_invalid_name_before_fetching() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let sources = vec![Source::new("../oj", format!("{}/oj.md", mock_server.uri()))];

    let result = update(sources, temp_dir.path().to_path_buf()).await;

    assert!(matches!(result, Err(SplitterError::InvalidName(_))));
}
