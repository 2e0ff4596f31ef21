//! Release metadata: decoding, asset selection and update results.

mod decode;
mod feed;
mod picker;
mod types;

pub use decode::{decode_github_release, decode_manifest};
pub use feed::{FeedKind, FetchRelease, ReleaseFeed};
pub use picker::{AssetPicker, PlatformAssetPicker};
pub use types::{Asset, ReleaseDescriptor, UpdateResult, is_newer_tag};

#[cfg(test)]
pub use feed::MockFetchRelease;
