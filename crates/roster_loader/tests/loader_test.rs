//! Integration tests for source loading.
//!
//! Local sources use temporary files; remote sources are served by a
//! minimal HTTP responder bound to localhost.

use pretty_assertions::assert_eq;
use roster_config::LoaderConfig;
use roster_core::SourceFormat;
use roster_loader::{LoadError, Loader, Source};
use rust_xlsxwriter::Workbook;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const ROSTER_CSV: &str = "name,gender,phone number,date of birth\n\
                          Ada,female,+44 20 7946 0958,10/12/1815\n\
                          Alan,male,0123456789,23/06/1912\n";

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Builds a workbook whose first sheet is unrelated and whose second sheet,
/// "People", holds a roster with a numeric phone cell.
fn roster_workbook() -> NamedTempFile {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "x").unwrap();

    let people = workbook.add_worksheet();
    people.set_name("People").unwrap();
    for (col, column) in ["name", "gender", "phone number", "date of birth"]
        .into_iter()
        .enumerate()
    {
        people.write_string(0, col as u16, column).unwrap();
    }
    people.write_string(1, 0, "Ada").unwrap();
    people.write_string(1, 1, "Female").unwrap();
    people.write_number(1, 2, 1234567890.0).unwrap();
    people.write_string(1, 3, "10/12/1815").unwrap();

    let bytes = workbook.save_to_buffer().unwrap();
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file
}

/// Serves a single HTTP response and returns the URL to request.
async fn serve_once(status: &'static str, body: Vec<u8>, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: text/csv\r\nConnection: close\r\n\r\n",
            body.len()
        );
        // The client may hang up early when it rejects the response.
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}{path}")
}

/// Serves one chunked HTTP response with no `Content-Length`.
async fn serve_chunked(chunks: Vec<Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        let head = "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nContent-Type: text/csv\r\nConnection: close\r\n\r\n";
        let _ = socket.write_all(head.as_bytes()).await;
        for chunk in chunks {
            let _ = socket
                .write_all(format!("{:x}\r\n", chunk.len()).as_bytes())
                .await;
            let _ = socket.write_all(&chunk).await;
            let _ = socket.write_all(b"\r\n").await;
            let _ = socket.flush().await;
        }
        let _ = socket.write_all(b"0\r\n\r\n").await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/stream.csv")
}

#[tokio::test]
async fn test_load_local_csv() {
    let file = csv_file(ROSTER_CSV);
    let loader = Loader::new(LoaderConfig::default());

    let loaded = loader.load(file.path().to_str().unwrap()).await.unwrap();

    assert_eq!(loaded.format, SourceFormat::Csv);
    assert_eq!(loaded.size, ROSTER_CSV.len() as u64);
    assert_eq!(loaded.dataset.len(), 2);
    assert!(matches!(loaded.source, Source::Local(_)));
    assert_eq!(loaded.dataset.get_record(0).unwrap()["name"], "Ada");
}

#[tokio::test]
async fn test_local_size_limit_checked_before_parsing() {
    // Not valid UTF-8, so reaching the parser would give a different error.
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(&[0xff; 64]).unwrap();

    let config = LoaderConfig::builder().max_bytes(32).build().unwrap();
    let result = Loader::new(config).load(file.path().to_str().unwrap()).await;

    assert!(matches!(
        result,
        Err(LoadError::SourceTooLarge { size: 64, limit: 32 })
    ));
}

#[tokio::test]
async fn test_local_size_at_limit_is_accepted() {
    let file = csv_file(ROSTER_CSV);
    let config = LoaderConfig::builder()
        .max_bytes(ROSTER_CSV.len() as u64)
        .build()
        .unwrap();

    let loaded = Loader::new(config)
        .load(file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(loaded.dataset.len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_local_read_is_capped_when_metadata_understates_size() {
    // Device files report a length of zero but never run dry.
    let config = LoaderConfig::builder().max_bytes(32).build().unwrap();
    let result = Loader::new(config).load("/dev/zero").await;

    assert!(matches!(
        result,
        Err(LoadError::SourceTooLarge { size: 33, limit: 32 })
    ));
}

#[tokio::test]
async fn test_load_workbook_named_sheet() {
    let file = roster_workbook();
    let config = LoaderConfig::builder().sheet("People").build().unwrap();

    let loaded = Loader::new(config)
        .load(file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(loaded.format, SourceFormat::Excel);
    assert_eq!(
        loaded.dataset.header(),
        ["name", "gender", "phone number", "date of birth"]
    );
    assert_eq!(loaded.dataset.len(), 1);

    let ada = loaded.dataset.get_record(0).unwrap();
    assert_eq!(ada["name"], "Ada");
    assert_eq!(ada["phone number"], "1234567890");
    assert_eq!(ada["date of birth"], "10/12/1815");
}

#[tokio::test]
async fn test_load_workbook_defaults_to_first_sheet() {
    let file = roster_workbook();

    let loaded = Loader::default()
        .load(file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(loaded.dataset.header(), ["x"]);
    assert!(loaded.dataset.is_empty());
}

#[tokio::test]
async fn test_load_workbook_unknown_sheet() {
    let file = roster_workbook();
    let config = LoaderConfig::builder().sheet("Staff").build().unwrap();

    let result = Loader::new(config).load(file.path().to_str().unwrap()).await;

    assert!(matches!(result, Err(LoadError::Spreadsheet(_))));
}

#[tokio::test]
async fn test_missing_local_file() {
    let result = Loader::default().load("no/such/roster.csv").await;
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[tokio::test]
async fn test_load_remote_csv() {
    let url = serve_once("200 OK", ROSTER_CSV.as_bytes().to_vec(), "/people.csv").await;

    let loaded = Loader::default().load(&url).await.unwrap();

    assert!(loaded.source.is_remote());
    assert_eq!(loaded.format, SourceFormat::Csv);
    assert_eq!(loaded.dataset.len(), 2);
    assert_eq!(loaded.dataset.get_record(1).unwrap()["gender"], "male");
}

#[tokio::test]
async fn test_remote_size_limit() {
    let url = serve_once("200 OK", vec![b'a'; 2048], "/big.csv").await;
    let config = LoaderConfig::builder().max_bytes(1024).build().unwrap();

    let result = Loader::new(config).load(&url).await;

    assert!(matches!(
        result,
        Err(LoadError::SourceTooLarge { limit: 1024, .. })
    ));
}

#[tokio::test]
async fn test_remote_chunked_body_over_limit() {
    let url = serve_chunked(vec![vec![b'a'; 512]; 4]).await;
    let config = LoaderConfig::builder().max_bytes(1024).build().unwrap();

    let result = Loader::new(config).load(&url).await;

    match result {
        Err(LoadError::SourceTooLarge { size, limit }) => {
            assert_eq!(limit, 1024);
            assert!(size > 1024);
        }
        other => panic!("Expected SourceTooLarge, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_chunked_body_within_limit() {
    let body = ROSTER_CSV.as_bytes();
    let (first, rest) = body.split_at(body.len() / 2);
    let url = serve_chunked(vec![first.to_vec(), rest.to_vec()]).await;

    let loaded = Loader::default().load(&url).await.unwrap();

    assert_eq!(loaded.size, ROSTER_CSV.len() as u64);
    assert_eq!(loaded.dataset.len(), 2);
}

#[tokio::test]
async fn test_remote_error_status() {
    let url = serve_once("404 Not Found", b"missing".to_vec(), "/gone.csv").await;

    let result = Loader::default().load(&url).await;

    match result {
        Err(LoadError::SourceUnavailable(message)) => assert!(message.contains("404")),
        other => panic!("Expected SourceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_unreachable() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = Loader::default()
        .load(&format!("http://{addr}/people.csv"))
        .await;

    assert!(matches!(result, Err(LoadError::SourceUnavailable(_))));
}
