use super::types::Asset;
use crate::platform::Platform;

/// Trait for selecting an asset from a list of available assets
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, assets: &'a [Asset]) -> Option<&'a Asset>;
}

/// Picks the first asset (in feed order) whose name looks like it targets
/// the given platform. Matching is a case-sensitive substring test.
#[derive(Debug, Clone)]
pub struct PlatformAssetPicker {
    platform: Platform,
}

impl PlatformAssetPicker {
    pub fn new() -> Self {
        Self {
            platform: Platform::detect(),
        }
    }

    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }

    /// Check if an asset name matches the platform
    fn matches_platform(&self, name: &str) -> bool {
        match self.platform {
            Platform::Windows => name.contains("windows") || name.contains(".exe"),
            Platform::Darwin => {
                name.contains("darwin") || name.contains("mac") || name.contains(".dmg")
            }
            Platform::Linux => name.contains("linux"),
            Platform::Other(_) => false,
        }
    }
}

impl Default for PlatformAssetPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetPicker for PlatformAssetPicker {
    fn pick<'a>(&self, assets: &'a [Asset]) -> Option<&'a Asset> {
        assets.iter().find(|a| self.matches_platform(&a.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to create test assets from names
    fn make_assets(names: &[&str]) -> Vec<Asset> {
        names
            .iter()
            .map(|name| Asset {
                name: name.to_string(),
                url: format!("https://example.com/{}", name),
            })
            .collect()
    }

    fn pick_name(platform: Platform, names: &[&str]) -> Option<String> {
        let assets = make_assets(names);
        PlatformAssetPicker::with_platform(platform)
            .pick(&assets)
            .map(|a| a.name.clone())
    }

    #[test]
    fn test_windows_matches_name_or_exe() {
        assert_eq!(
            pick_name(Platform::Windows, &["app-linux", "app-windows.zip"]),
            Some("app-windows.zip".into())
        );
        assert_eq!(
            pick_name(Platform::Windows, &["app-linux", "setup.exe"]),
            Some("setup.exe".into())
        );
    }

    #[test]
    fn test_darwin_matches_any_hint() {
        assert_eq!(
            pick_name(Platform::Darwin, &["app-linux", "app-darwin.tar.gz"]),
            Some("app-darwin.tar.gz".into())
        );
        assert_eq!(
            pick_name(Platform::Darwin, &["app-macos.zip"]),
            Some("app-macos.zip".into())
        );
        assert_eq!(
            pick_name(Platform::Darwin, &["App.dmg"]),
            Some("App.dmg".into())
        );
    }

    #[test]
    fn test_linux_matches_only_linux() {
        assert_eq!(
            pick_name(Platform::Linux, &["app.AppImage", "app-linux-amd64"]),
            Some("app-linux-amd64".into())
        );
        assert_eq!(pick_name(Platform::Linux, &["app.AppImage"]), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            pick_name(
                Platform::Windows,
                &["app-linux", "app-windows-arm64.zip", "app-windows-x64.exe"]
            ),
            Some("app-windows-arm64.zip".into())
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(pick_name(Platform::Linux, &["App-Linux"]), None);
        assert_eq!(pick_name(Platform::Windows, &["SETUP.EXE"]), None);
    }

    #[test]
    fn test_heuristic_is_substring_based() {
        // A Windows build whose name mentions darwin is picked on macOS too
        assert_eq!(
            pick_name(Platform::Darwin, &["app-darwin-compat.exe"]),
            Some("app-darwin-compat.exe".into())
        );
        // "mac" inside an unrelated word also counts
        assert_eq!(
            pick_name(Platform::Darwin, &["machine-learning-linux"]),
            Some("machine-learning-linux".into())
        );
    }

    #[test]
    fn test_other_platform_never_matches() {
        assert_eq!(
            pick_name(
                Platform::Other("freebsd".into()),
                &["app-freebsd", "app-linux", "app.exe"]
            ),
            None
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(pick_name(Platform::Windows, &[]), None);
    }

    #[test]
    fn test_default_uses_detected_platform() {
        let picker = PlatformAssetPicker::default();
        assert_eq!(picker.platform, Platform::detect());
    }
}
