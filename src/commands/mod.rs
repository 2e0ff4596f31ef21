use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    bridge::{self, JsonLineSink},
    platform::CurrentPlatform,
    runtime::Runtime,
};

pub mod config;
mod paths;
mod services;

pub use config::{Config, ConfigOverrides};
pub use paths::default_download_path;
pub use services::{build_app, build_feed};

/// Check for updates and print the result as JSON
#[tracing::instrument(skip(runtime, overrides))]
pub async fn check<R: Runtime + 'static>(runtime: R, overrides: ConfigOverrides) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let app = build_app(runtime, &config, &CurrentPlatform)?;

    let result = app.check_for_updates().await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Download an update, defaulting the destination to the download directory
#[tracing::instrument(skip(runtime, overrides))]
pub async fn download<R: Runtime + 'static>(
    runtime: R,
    url: &str,
    dest: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let dest = match dest {
        Some(dest) => dest,
        None => default_download_path(&runtime, url)?,
    };
    debug!("Download destination: {:?}", dest);

    let app = build_app(runtime, &config, &CurrentPlatform)?;
    let bytes = app.download_update(url, &dest).await?;
    println!("Downloaded {} bytes to {}", bytes, dest.display());
    Ok(())
}

/// Launch a downloaded installer and return immediately
#[tracing::instrument(skip(runtime, overrides))]
pub fn install<R: Runtime + 'static>(
    runtime: R,
    installer: &Path,
    overrides: ConfigOverrides,
) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let app = build_app(runtime, &config, &CurrentPlatform)?;

    app.install_update(installer)
        .with_context(|| format!("Failed to install {}", installer.display()))?;
    println!("Started installer {}", installer.display());
    Ok(())
}

/// Print a document and wait for the print command to finish
#[tracing::instrument(skip(runtime, overrides))]
pub async fn print<R: Runtime + 'static>(
    runtime: R,
    document: &Path,
    overrides: ConfigOverrides,
) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let app = build_app(runtime, &config, &CurrentPlatform)?;

    app.print_silent(document)
        .await
        .with_context(|| format!("Failed to print {}", document.display()))?;
    Ok(())
}

/// Print the compiled-in application version
pub fn version() {
    println!("{}", crate::APP_VERSION);
}

/// Serve bound operations over stdin/stdout until stdin closes
#[tracing::instrument(skip(runtime, overrides))]
pub async fn serve<R: Runtime + 'static>(runtime: R, overrides: ConfigOverrides) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let app = build_app(runtime, &config, &CurrentPlatform)?;

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let sink = Arc::new(JsonLineSink::stdout());
    bridge::serve(Arc::new(app), input, sink)
        .await
        .context("Bridge I/O failed")?;
    Ok(())
}
