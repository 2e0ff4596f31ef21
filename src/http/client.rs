//! HTTP client with status checking and per-request timeouts.

use log::debug;
use reqwest::{
    Client, Response, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Timeout for release metadata requests.
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for binary payload downloads.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// HTTP client shared by the release feed and the downloader.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a single GET. Anything but 200 OK is a `Network` error
    /// carrying the status code.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<Response> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Error::network(url, None, e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::network(
                url,
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        Ok(response)
    }

    /// Performs a GET and returns the whole body.
    #[tracing::instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        let response = self.get(url, timeout).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(url, None, format!("Failed to read response: {}", e)))?;
        Ok(body.to_vec())
    }

    /// Streams a GET response into a writer for `dest`. The writer is only
    /// created once the server has answered 200 OK. Returns the number of
    /// bytes written.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(
        &self,
        url: &str,
        dest: &Path,
        timeout: Duration,
        create_writer: F,
    ) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let mut response = self.get(url, timeout).await?;
        let mut writer = create_writer()?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response.chunk().await.map_err(|e| {
            Error::network(
                url,
                None,
                format!("Failed to read chunk from download stream: {}", e),
            )
        })? {
            writer
                .write_all(&chunk)
                .map_err(|e| Error::io("Failed to write downloaded data to", dest, e))?;
            downloaded_bytes += chunk.len() as u64;
        }

        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush downloaded data to", dest, e))?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> anyhow::Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent(concat!("deskshell/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}
