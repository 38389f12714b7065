//! Size-capped retrieval of raw source bytes.
//!
//! The ceiling is enforced before any parsing happens: local files are
//! checked against their metadata, remote bodies against `Content-Length`,
//! and both against the bytes actually read.

use crate::{LoadError, Result, Source};
use roster_config::LoaderConfig;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Fetches the raw bytes of a source, enforcing `config.max_bytes`.
pub async fn fetch(source: &Source, config: &LoaderConfig) -> Result<Vec<u8>> {
    match source {
        Source::Local(path) => fetch_local(path, config.max_bytes).await,
        Source::Remote(url) => fetch_remote(url, config).await,
    }
}

async fn fetch_local(path: &Path, limit: u64) -> Result<Vec<u8>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| LoadError::io(path, e))?;

    if metadata.len() > limit {
        return Err(LoadError::too_large(metadata.len(), limit));
    }

    debug!("Reading {} bytes from {}", metadata.len(), path.display());
    let file = File::open(path).await.map_err(|e| LoadError::io(path, e))?;

    // Pipes, device files and growing files can report a smaller size.
    let mut body = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .await
        .map_err(|e| LoadError::io(path, e))?;

    if body.len() as u64 > limit {
        return Err(LoadError::too_large(body.len() as u64, limit));
    }
    Ok(body)
}

async fn fetch_remote(url: &str, config: &LoaderConfig) -> Result<Vec<u8>> {
    let limit = config.max_bytes;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    info!("Downloading {}", url);
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::unavailable(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::unavailable(format!("{url} returned HTTP {status}")));
    }

    if let Some(length) = response.content_length() {
        debug!("Content-Length: {}", length);
        if length > limit {
            return Err(LoadError::too_large(length, limit));
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
        if body.len() as u64 > limit {
            return Err(LoadError::too_large(body.len() as u64, limit));
        }
    }

    debug!("Downloaded {} bytes", body.len());
    Ok(body)
}
