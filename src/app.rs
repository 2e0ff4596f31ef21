//! Bound operations exposed to the frontend.
//!
//! Every operation can be invoked at any time and in any order; there is no
//! update session. Installing a file that was never downloaded simply fails
//! with the resulting I/O or launch error.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::bridge::EventSink;
use crate::error::{Error, Result};
use crate::print::PlatformPrinter;
use crate::release::{FetchRelease, UpdateResult};
use crate::runtime::Runtime;
use crate::updater::{Updater, schedule_auto_check};

pub struct App<R: Runtime, F: FetchRelease> {
    runtime: Arc<R>,
    updater: Arc<Updater<F>>,
    printer: PlatformPrinter,
    auto_check_delay: Duration,
}

impl<R: Runtime + 'static, F: FetchRelease + 'static> App<R, F> {
    pub fn new(
        runtime: R,
        updater: Updater<F>,
        printer: PlatformPrinter,
        auto_check_delay: Duration,
    ) -> Self {
        Self {
            runtime: Arc::new(runtime),
            updater: Arc::new(updater),
            printer,
            auto_check_delay,
        }
    }

    /// Schedule the one-shot background update check. The returned handle
    /// may be dropped; the check still runs.
    pub fn startup(&self, sink: Arc<dyn EventSink>) -> JoinHandle<()> {
        schedule_auto_check(self.updater.clone(), self.auto_check_delay, sink)
    }

    pub async fn check_for_updates(&self) -> Result<UpdateResult> {
        self.updater.check_for_updates().await
    }

    pub async fn download_update(&self, url: &str, dest: &Path) -> Result<u64> {
        self.updater
            .download_update(self.runtime.as_ref(), url, dest)
            .await
    }

    pub fn install_update(&self, installer: &Path) -> Result<()> {
        self.updater
            .install_update(self.runtime.as_ref(), installer)
    }

    /// Waits for the print command to exit. The command runs on the
    /// blocking pool so other operations keep being served meanwhile.
    pub async fn print_silent(&self, document: &Path) -> Result<()> {
        let runtime = self.runtime.clone();
        let printer = self.printer.clone();
        let document = document.to_path_buf();

        tokio::task::spawn_blocking(move || printer.print(runtime.as_ref(), &document))
            .await
            .map_err(|e| Error::ProcessLaunch {
                program: "print".to_string(),
                status: None,
                message: e.to_string(),
            })?
    }

    pub fn get_app_version(&self) -> &str {
        self.updater.current_version()
    }
}
