//! HTTP client module: single-attempt GETs with per-call timeouts.

mod client;

pub use client::{DOWNLOAD_TIMEOUT, HttpClient, METADATA_TIMEOUT, build_http_client};
