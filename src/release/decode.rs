//! Decoders for the supported release feeds.

use serde::Deserialize;

use super::types::{Asset, ReleaseDescriptor};
use crate::error::{Error, Result};

/// GitHub "latest release" API response
#[derive(Deserialize, Debug)]
struct GitHubRelease {
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    published_at: Option<String>,
    assets: Vec<GitHubAsset>,
}

#[derive(Deserialize, Debug)]
struct GitHubAsset {
    name: String,
    browser_download_url: String,
}

/// Flat `latest.json` manifest
#[derive(Deserialize, Debug)]
struct Manifest {
    version: String,
    url: String,
    release_date: Option<String>,
    changelog: Option<String>,
}

/// Decode a GitHub release JSON body. `tag_name` and `assets` are required;
/// null or absent title, body and publish date decode to empty strings.
pub fn decode_github_release(body: &[u8]) -> Result<ReleaseDescriptor> {
    let release: GitHubRelease = serde_json::from_slice(body).map_err(Error::decode)?;

    Ok(ReleaseDescriptor {
        tag: release.tag_name,
        title: release.name.unwrap_or_default(),
        changelog: release.body.unwrap_or_default(),
        published_at: release.published_at.unwrap_or_default(),
        assets: release
            .assets
            .into_iter()
            .map(|a| Asset {
                name: a.name,
                url: a.browser_download_url,
            })
            .collect(),
    })
}

/// Decode a `latest.json` manifest into a single-asset release.
pub fn decode_manifest(body: &[u8]) -> Result<ReleaseDescriptor> {
    let manifest: Manifest = serde_json::from_slice(body).map_err(Error::decode)?;

    let name = manifest
        .url
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(&manifest.version)
        .to_string();

    Ok(ReleaseDescriptor {
        title: manifest.version.clone(),
        tag: manifest.version,
        changelog: manifest.changelog.unwrap_or_default(),
        published_at: manifest.release_date.unwrap_or_default(),
        assets: vec![Asset {
            name,
            url: manifest.url,
        }],
    })
}
