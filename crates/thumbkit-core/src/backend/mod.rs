//! Image transform backends.
//!
//! The host only depends on [`ImageTransformBackend`] and picks an
//! implementation from its configuration.

mod thumbor;

pub use thumbor::{build_url, ThumborBackend};

use crate::asset::AssetDescriptor;
use crate::transform::TransformDescriptor;

/// What a transform service offers the host.
pub trait ImageTransformBackend {
    /// URL of `asset` with `transform` applied, or `None` if this backend
    /// does not handle the asset.
    fn transform_url(&self, asset: &AssetDescriptor, transform: &TransformDescriptor)
        -> Option<String>;

    /// Same transform, re-encoded as `format` (e.g. `webp`).
    fn alternate_format_url(
        &self,
        asset: &AssetDescriptor,
        transform: &TransformDescriptor,
        format: &str,
    ) -> Option<String>;

    /// Invalidates a previously generated URL. Returns whether it did.
    fn purge_url(&self, url: &str) -> bool;

    /// Path the service loads the original from.
    fn asset_uri(&self, asset: &AssetDescriptor) -> String;
}
