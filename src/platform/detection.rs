use std::sync::OnceLock;

/// Operating system family the shell knows how to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Darwin,
    Linux,
    /// Anything else, carrying the raw OS name
    Other(String),
}

impl Platform {
    /// Detect the current platform (cached for the process lifetime)
    pub fn detect() -> Self {
        static DETECTED: OnceLock<Platform> = OnceLock::new();
        DETECTED
            .get_or_init(|| Self::from_os(std::env::consts::OS))
            .clone()
    }

    /// Map an OS name (as reported by `std::env::consts::OS` or `GOOS`) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" | "darwin" => Platform::Darwin,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Other(os) => os,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Platform;
}

/// Detector backed by the compile-time target OS
pub struct CurrentPlatform;

impl PlatformDetector for CurrentPlatform {
    fn detect(&self) -> Platform {
        Platform::detect()
    }
}
