//! Result file downloads
//!
//! Streams a result link into a destination folder, naming the local file
//! after the last segment of the URL path.

use crate::errors::{Result, StepError};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Anything that can persist a result link into a folder
#[async_trait]
pub trait ResultSaver: Send + Sync {
    /// Download `url` into `folder`, returning the written path
    async fn save(&self, url: &str, folder: &Path) -> Result<PathBuf>;
}

/// Local file name for a result link
///
/// Uses the last non-empty path segment as it appears in the URL; query
/// and fragment are ignored.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| StepError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| StepError::InvalidUrl {
            url: url.to_string(),
            reason: "no file name in URL path".to_string(),
        })
}

/// reqwest-backed saver
#[derive(Debug, Clone)]
pub struct HttpSaver {
    client: Client,
}

impl HttpSaver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResultSaver for HttpSaver {
    async fn save(&self, url: &str, folder: &Path) -> Result<PathBuf> {
        let destination = folder.join(file_name_from_url(url)?);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StepError::request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StepError::request(url, format!("HTTP status {}", status)));
        }

        let mut file = File::create(&destination)
            .await
            .map_err(|e| StepError::io(&destination, e))?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| StepError::request(url, e))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| StepError::io(&destination, e))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| StepError::io(&destination, e))?;

        debug!(url, path = %destination.display(), bytes = written, "saved result file");
        Ok(destination)
    }
}
