//! Platform detection
//!
//! The platform is resolved once per process and then only read. It drives
//! asset selection as well as the installer and print strategies.

mod detection;

pub use detection::{CurrentPlatform, Platform, PlatformDetector};
