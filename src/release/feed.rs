use async_trait::async_trait;
use log::debug;

use super::decode::{decode_github_release, decode_manifest};
use super::types::ReleaseDescriptor;
use crate::error::Result;
use crate::http::{HttpClient, METADATA_TIMEOUT};

/// Wire format of the release feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FeedKind {
    /// GitHub "latest release" API
    #[default]
    Github,
    /// Flat JSON manifest with a single download URL
    Manifest,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchRelease: Send + Sync {
    /// Fetch and decode the latest release.
    async fn fetch_latest(&self) -> Result<ReleaseDescriptor>;

    fn kind(&self) -> FeedKind;
}

/// Release feed backed by an HTTP endpoint
pub struct ReleaseFeed {
    http: HttpClient,
    url: String,
    kind: FeedKind,
}

impl ReleaseFeed {
    /// Feed for `{api_url}/repos/{owner}/{repo}/releases/latest`
    pub fn github(http: HttpClient, api_url: &str, repo: &str) -> Self {
        Self {
            http,
            url: format!(
                "{}/repos/{}/releases/latest",
                api_url.trim_end_matches('/'), repo
            ),
            kind: FeedKind::Github,
        }
    }

    pub fn manifest(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            kind: FeedKind::Manifest,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FetchRelease for ReleaseFeed {
    #[tracing::instrument(skip(self))]
    async fn fetch_latest(&self) -> Result<ReleaseDescriptor> {
        debug!("Fetching latest release from {}...", self.url);

        let body = self.http.get_bytes(&self.url, METADATA_TIMEOUT).await?;
        match self.kind {
            FeedKind::Github => decode_github_release(&body),
            FeedKind::Manifest => decode_manifest(&body),
        }
    }

    fn kind(&self) -> FeedKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use reqwest::Client;

    #[test]
    fn test_github_feed_url() {
        let http = HttpClient::new(Client::new());
        let feed = ReleaseFeed::github(http, "https://api.github.com/", "owner/app");
        assert_eq!(
            feed.url(),
            "https://api.github.com/repos/owner/app/releases/latest"
        );
        assert_eq!(feed.kind(), FeedKind::Github);
    }

    #[tokio::test]
    async fn test_fetch_latest_github() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/owner/app/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.1.0",
                    "name": "v1.1.0",
                    "body": "notes",
                    "published_at": "2024-01-01T00:00:00Z",
                    "assets": [{"name": "app-linux", "browser_download_url": "https://example.com/app-linux"}]
                }"#,
            )
            .create_async()
            .await;

        let feed = ReleaseFeed::github(HttpClient::new(Client::new()), &url, "owner/app");
        let release = feed.fetch_latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag, "v1.1.0");
        assert_eq!(release.assets.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_latest_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/owner/app/releases/latest")
            .with_status(404)
            .create_async()
            .await;

        let feed = ReleaseFeed::github(HttpClient::new(Client::new()), &url, "owner/app");
        let err = feed.fetch_latest().await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, Error::Network { status: Some(404), .. }));
    }

    #[tokio::test]
    async fn test_fetch_latest_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/owner/app/releases/latest")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let feed = ReleaseFeed::github(HttpClient::new(Client::new()), &url, "owner/app");
        let err = feed.fetch_latest().await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_fetch_latest_manifest() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/main/latest.json")
            .with_status(200)
            .with_body(
                r#"{"version": "1.3.0", "url": "https://example.com/app.exe"}"#,
            )
            .create_async()
            .await;

        let feed = ReleaseFeed::manifest(
            HttpClient::new(Client::new()),
            format!("{}/main/latest.json", url),
        );
        let release = feed.fetch_latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(feed.kind(), FeedKind::Manifest);
        assert_eq!(release.tag, "1.3.0");
        assert_eq!(release.assets[0].url, "https://example.com/app.exe");
    }
}
