use anyhow::{Result, bail};
use log::debug;
use std::time::Duration;

use crate::{APP_VERSION, release::FeedKind, runtime::Runtime};

pub const DEFAULT_REPO: &str = "fazliddinrasulov/wailsUpdate";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_AUTO_CHECK_DELAY: Duration = Duration::from_secs(5);

/// Command-line / environment overrides
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub repo: Option<String>,
    pub api_url: Option<String>,
    pub feed: Option<FeedKind>,
    pub manifest_url: Option<String>,
    pub auto_check_delay: Option<Duration>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub repo: String,
    pub api_url: String,
    pub feed: FeedKind,
    pub manifest_url: Option<String>,
    pub token: Option<String>,
    pub current_version: String,
    pub auto_check_delay: Duration,
}

impl Config {
    pub fn load<R: Runtime>(runtime: &R, overrides: ConfigOverrides) -> Result<Self> {
        let repo = overrides.repo.unwrap_or_else(|| DEFAULT_REPO.to_string());
        validate_repo(&repo)?;

        let feed = overrides.feed.unwrap_or_default();
        if feed == FeedKind::Manifest && overrides.manifest_url.is_none() {
            bail!("The manifest feed requires --manifest-url.");
        }

        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_some() {
            debug!("Using GITHUB_TOKEN for authentication");
        }

        Ok(Self {
            repo,
            api_url: overrides
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            feed,
            manifest_url: overrides.manifest_url,
            token,
            current_version: APP_VERSION.to_string(),
            auto_check_delay: overrides
                .auto_check_delay
                .unwrap_or(DEFAULT_AUTO_CHECK_DELAY),
        })
    }
}

fn validate_repo(repo: &str) -> Result<()> {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        bail!(
            "Invalid repository format '{}'. Expected 'owner/repo'.",
            repo
        );
    }
    Ok(())
}
