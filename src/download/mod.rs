use crate::error::Result;
use crate::http::{DOWNLOAD_TIMEOUT, HttpClient};
use crate::runtime::Runtime;
use log::info;
use std::path::Path;

/// Streams `url` into `dest`, creating missing parent directories first.
///
/// Nothing is written unless the server answers 200 OK. A failure while
/// streaming leaves whatever was already written at `dest`.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    http_client: &HttpClient,
    url: &str,
    dest: &Path,
) -> Result<u64> {
    info!("Downloading {} to {:?}...", url, dest);

    let bytes = http_client
        .download_file(url, dest, DOWNLOAD_TIMEOUT, || {
            if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
                runtime.create_dir_all(parent)?;
            }
            runtime.create_file(dest)
        })
        .await?;

    info!("Download complete ({} bytes).", bytes);
    Ok(bytes)
}
