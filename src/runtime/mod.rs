//! Runtime abstraction for system operations.
//!
//! Every OS-level side effect (filesystem writes, process launches,
//! environment lookups) goes through the [`Runtime`] trait so the update and
//! print flows can be exercised with a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables and well-known directories
//! - `fs` - File system operations (directories, files, permissions)
//! - `process` - External process launches (detached and blocking)

mod env;
mod fs;
mod process;

use std::env as std_env;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System

    /// Create a directory and all missing parents (0755 on Unix).
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create or truncate a file for writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>>;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Processes

    /// Start a process and return as soon as it is running. The child is
    /// never waited on and its exit status is not observed.
    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<()>;

    /// Run a process to completion. A non-zero exit is an error carrying the
    /// exit code and the command's stderr.
    fn run(&self, program: &Path, args: &[String]) -> Result<()>;

    // Directories
    fn download_dir(&self) -> Option<PathBuf>;
    fn cache_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>> {
        self.create_file_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<()> {
        self.spawn_detached_impl(program, args)
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        self.run_impl(program, args)
    }

    fn download_dir(&self) -> Option<PathBuf> {
        self.download_dir_impl()
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir_impl()
    }
}
