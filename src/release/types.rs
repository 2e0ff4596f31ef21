use serde::{Deserialize, Serialize};

/// A named downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub url: String,
}

/// The latest published release as described by the remote feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseDescriptor {
    pub tag: String,
    pub title: String,
    pub changelog: String,
    pub published_at: String,
    pub assets: Vec<Asset>,
}

/// Result of an update check, handed to the frontend as-is
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateResult {
    pub available: bool,
    pub version: String,
    pub release_date: String,
    pub changelog: String,
    /// Empty when no asset matched the current platform
    pub download_url: String,
}

impl UpdateResult {
    pub fn from_release(
        release: &ReleaseDescriptor,
        current_version: &str,
        download_url: String,
    ) -> Self {
        Self {
            available: is_newer_tag(&release.tag, current_version),
            version: release.tag.clone(),
            release_date: release.published_at.clone(),
            changelog: release.changelog.clone(),
            download_url,
        }
    }

    pub fn is_downloadable(&self) -> bool {
        !self.download_url.is_empty()
    }
}

/// Whether `tag` names a different release than `current_version`.
///
/// This is a literal string comparison (bare and `v`-prefixed), not a
/// semantic version ordering: an older tag still counts as available.
pub fn is_newer_tag(tag: &str, current_version: &str) -> bool {
    tag != current_version && tag != format!("v{}", current_version)
}
