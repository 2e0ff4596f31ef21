//! Error taxonomy shared by every component.
//!
//! Each variant keeps the original cause as context so the caller (the CLI or
//! the frontend bridge) can decide how to present it.

use std::path::{Path, PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or a status other than 200 OK.
    #[error("{}", network_message(.url, .status, .message))]
    Network {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Malformed or incomplete release JSON.
    #[error("Failed to parse release info: {message}")]
    Decode { message: String },

    /// Filesystem create/write failure.
    #[error("{context} {path:?}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    /// External command failed to start or exited non-zero.
    #[error("{}", process_message(.program, .status, .message))]
    ProcessLaunch {
        program: String,
        status: Option<i32>,
        message: String,
    },
}

impl Error {
    pub fn network(url: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Network {
            url: url.to_string(),
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl std::fmt::Display) -> Self {
        Error::Decode {
            message: message.to_string(),
        }
    }

    pub fn io(context: &'static str, path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stable tag reported to the frontend alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Network { .. } => "network",
            Error::Decode { .. } => "decode",
            Error::Io { .. } => "io",
            Error::UnsupportedPlatform(_) => "unsupported_platform",
            Error::ProcessLaunch { .. } => "process_launch",
        }
    }

    /// HTTP status carried by a `Network` error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network { status, .. } => *status,
            _ => None,
        }
    }
}

fn network_message(url: &str, status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Request to {} returned status: {}", url, code),
        None => format!("Request to {} failed: {}", url, message),
    }
}

fn process_message(program: &str, status: &Option<i32>, message: &str) -> String {
    match status {
        Some(code) if message.is_empty() => format!("{} exited with status {}", program, code),
        Some(code) => format!("{} exited with status {}: {}", program, code, message),
        None => format!("Failed to run {}: {}", program, message),
    }
}
