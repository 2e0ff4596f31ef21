use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Default location for a downloaded update: the user's download directory,
/// or `<cache>/deskshell/updates` when there is none.
pub fn default_download_path<R: Runtime>(runtime: &R, url: &str) -> Result<PathBuf> {
    let Some(file_name) = file_name_from_url(url) else {
        bail!(
            "Cannot derive a file name from {}; pass a destination path.",
            url
        );
    };

    let dir = match runtime.download_dir() {
        Some(dir) => dir,
        None => runtime
            .cache_dir()
            .context("No download directory available; pass a destination path.")?
            .join("deskshell")
            .join("updates"),
    };

    Ok(dir.join(file_name))
}

fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?;
    let path = path.split_once("://").map_or(path, |(_, rest)| rest);
    let (_, name) = path.rsplit_once('/')?;
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://github.com/o/r/releases/download/v2/app-setup.exe"),
            Some("app-setup.exe")
        );
        assert_eq!(
            file_name_from_url("https://example.com/App.dmg?token=abc#frag"),
            Some("App.dmg")
        );
        assert_eq!(file_name_from_url("https://example.com/"), None);
        assert_eq!(file_name_from_url("https://example.com"), None);
    }

    #[test]
    fn test_default_download_path_prefers_download_dir() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_download_dir()
            .returning(|| Some(PathBuf::from("/home/user/Downloads")));

        let url = "https://example.com/app-linux";
        let path = default_download_path(&runtime, url).unwrap();
        assert_eq!(path, PathBuf::from("/home/user/Downloads/app-linux"));
    }

    #[test]
    fn test_default_download_path_falls_back_to_cache() {
        let mut runtime = MockRuntime::new();
        runtime.expect_download_dir().returning(|| None);
        runtime
            .expect_cache_dir()
            .returning(|| Some(PathBuf::from("/home/user/.cache")));

        let url = "https://example.com/app-linux";
        let path = default_download_path(&runtime, url).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/user/.cache/deskshell/updates/app-linux")
        );
    }

    #[test]
    fn test_default_download_path_without_dirs() {
        let mut runtime = MockRuntime::new();
        runtime.expect_download_dir().returning(|| None);
        runtime.expect_cache_dir().returning(|| None);

        let result = default_download_path(&runtime, "https://example.com/app");
        assert!(result.is_err());
    }
}
