//! Installer dispatch.
//!
//! Launching is fire-and-forget: `launch` returns once the installer process
//! has started. Its exit status is never observed.

use log::info;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::runtime::Runtime;

/// Flag passed to Windows installers (Inno Setup / NSIS style).
pub const WINDOWS_SILENT_FLAG: &str = "/SILENT";

/// Installer launch strategy, chosen once from the detected platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformInstaller {
    /// Run the installer directly with a silent flag
    Windows,
    /// Hand the file to `open` (disk images, packages)
    Darwin,
    /// Mark the file executable and run it
    Linux,
    Unsupported(String),
}

impl PlatformInstaller {
    pub fn for_platform(platform: &Platform) -> Self {
        match platform {
            Platform::Windows => PlatformInstaller::Windows,
            Platform::Darwin => PlatformInstaller::Darwin,
            Platform::Linux => PlatformInstaller::Linux,
            Platform::Other(os) => PlatformInstaller::Unsupported(os.clone()),
        }
    }

    #[tracing::instrument(skip(runtime))]
    pub fn launch<R: Runtime>(&self, runtime: &R, installer: &Path) -> Result<()> {
        match self {
            PlatformInstaller::Windows => runtime.spawn_detached(
                &executable_path(installer),
                &[WINDOWS_SILENT_FLAG.to_string()],
            )?,
            PlatformInstaller::Darwin => runtime.spawn_detached(
                Path::new("open"),
                &[installer.to_string_lossy().into_owned()],
            )?,
            PlatformInstaller::Linux => {
                runtime.set_permissions(installer, 0o755)?;
                runtime.spawn_detached(&executable_path(installer), &[])?;
            }
            PlatformInstaller::Unsupported(os) => {
                return Err(Error::UnsupportedPlatform(os.clone()));
            }
        }

        info!("Installer {:?} started", installer);
        Ok(())
    }
}

/// A bare file name would be looked up on PATH; anchor it to the working directory.
fn executable_path(path: &Path) -> PathBuf {
    if path.is_relative() && path.components().count() == 1 {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}
