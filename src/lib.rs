pub mod app;
pub mod bridge;
pub mod commands;
pub mod download;
pub mod error;
pub mod http;
pub mod install;
pub mod platform;
pub mod print;
pub mod release;
pub mod runtime;
pub mod updater;

pub use error::{Error, Result};

/// Version of the running application, compared against published release tags.
pub const APP_VERSION: &str = env!("DESKSHELL_APP_VERSION");
