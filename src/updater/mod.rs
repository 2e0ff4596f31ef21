//! Update orchestration: check, download, install, and the silent
//! background check run once after startup.

use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::bridge::{EventSink, UPDATE_AVAILABLE_EVENT};
use crate::download::download_file;
use crate::error::Result;
use crate::http::HttpClient;
use crate::install::PlatformInstaller;
use crate::release::{AssetPicker, FeedKind, FetchRelease, UpdateResult};
use crate::runtime::Runtime;

pub struct Updater<F: FetchRelease> {
    feed: F,
    http: HttpClient,
    picker: Box<dyn AssetPicker>,
    installer: PlatformInstaller,
    current_version: String,
}

impl<F: FetchRelease> Updater<F> {
    pub fn new(
        feed: F,
        http: HttpClient,
        picker: Box<dyn AssetPicker>,
        installer: PlatformInstaller,
        current_version: impl Into<String>,
    ) -> Self {
        Self {
            feed,
            http,
            picker,
            installer,
            current_version: current_version.into(),
        }
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Fetch the latest release and compare it against the running version.
    #[tracing::instrument(skip(self))]
    pub async fn check_for_updates(&self) -> Result<UpdateResult> {
        let release = self.feed.fetch_latest().await?;

        let download_url = match self.feed.kind() {
            FeedKind::Github => self.picker.pick(&release.assets),
            FeedKind::Manifest => release.assets.first(),
        }
        .map(|asset| asset.url.clone())
        .unwrap_or_default();

        let result = UpdateResult::from_release(&release, &self.current_version, download_url);
        debug!(
            "Latest release {} (current {}), available: {}",
            result.version, self.current_version, result.available
        );
        if result.available && !result.is_downloadable() {
            warn!(
                "Release {} has no asset for this platform ({} assets published)",
                result.version, release.assets.len()
            );
        }
        Ok(result)
    }

    pub async fn download_update<R: Runtime>(
        &self,
        runtime: &R,
        url: &str,
        dest: &Path,
    ) -> Result<u64> {
        download_file(runtime, &self.http, url, dest).await
    }

    pub fn install_update<R: Runtime>(&self, runtime: &R, installer: &Path) -> Result<()> {
        self.installer.launch(runtime, installer)
    }

    /// Check silently; only a successful check that finds an update reaches
    /// the frontend. Failures are dropped.
    pub async fn auto_check(&self, sink: &dyn EventSink) {
        match self.check_for_updates().await {
            Ok(result) if result.available => match serde_json::to_value(&result) {
                Ok(payload) => {
                    info!("Update {} is available", result.version);
                    sink.emit(UPDATE_AVAILABLE_EVENT, payload);
                }
                Err(e) => debug!("Failed to encode update result: {}", e),
            },
            Ok(_) => debug!("Already up to date"),
            Err(e) => debug!("Background update check failed: {}", e),
        }
    }
}

/// Run [`Updater::auto_check`] once after `delay`, independently of any caller.
pub fn schedule_auto_check<F: FetchRelease + 'static>(
    updater: Arc<Updater<F>>,
    delay: Duration,
    sink: Arc<dyn EventSink>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        updater.auto_check(sink.as_ref()).await;
    })
}
