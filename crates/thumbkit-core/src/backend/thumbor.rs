//! Thumbor backend: maps CMS transforms onto signed Thumbor URLs.

use super::ImageTransformBackend;
use crate::asset::{AssetDescriptor, StorageBackend};
use crate::settings::BuilderSettings;
use crate::thumbor::{Filter, FocalBox, UrlBuilder};
use crate::transform::{TransformDescriptor, TransformMode};

/// Builds the Thumbor URL for `asset` with `transform` applied.
///
/// Returns `None` for vector assets. `output_format` appends a trailing
/// `format(...)` filter, which wins over any format the transform asks for.
pub fn build_url(
    asset: &AssetDescriptor,
    transform: &TransformDescriptor,
    settings: &BuilderSettings,
    output_format: Option<&str>,
) -> Option<String> {
    if asset.is_vector() {
        tracing::debug!(path = %asset.path, "skipping vector asset");
        return None;
    }

    let image = asset_uri(asset, settings);
    let mut builder = UrlBuilder::new(&settings.base_url, &settings.security_key, &image);
    let width = transform.width.unwrap_or(0);
    let height = transform.height.unwrap_or(0);

    match transform.mode {
        TransformMode::Fit => {
            builder.fit_in(width, height);
        }
        TransformMode::Stretch => {
            builder.resize(width, height).add_filter(Filter::Stretch);
        }
        TransformMode::Crop => {
            builder.resize(width, height);
            if let Some(point) = asset.focal_point {
                let focal = FocalBox::around(point, asset.width, asset.height);
                builder.add_filter(Filter::Focal(focal));
            } else if let Some((v, h)) = transform.alignment() {
                builder.valign(v).halign(h);
            }
        }
    }

    if let Some(format) = transform.normalized_format() {
        builder.add_filter(Filter::Format(format));
    }

    if let Some(quality) = transform.effective_quality(settings.default_quality) {
        builder.add_filter(Filter::Quality(quality));
    }

    if transform.interlace.is_some() {
        tracing::warn!(
            "Thumbor enables progressive JPEGs on the server, not per request; \
             ignoring interlace. See https://thumbor.readthedocs.io/en/latest/jpegtran.html"
        );
    }

    if settings.auto_sharpen_scaled_images
        && settings.sharpen_policy.should_sharpen(
            (asset.width, asset.height),
            (transform.width, transform.height),
        )
    {
        builder.add_filter(Filter::scaled_sharpen());
    }

    if let Some(format) = output_format {
        builder.add_filter(Filter::Format(format.to_string()));
    }

    let url = builder.to_string();
    tracing::debug!(%url, "built thumbor url");
    Some(url)
}

/// Asset path as Thumbor sees it, bucket-prefixed when configured.
fn asset_uri(asset: &AssetDescriptor, settings: &BuilderSettings) -> String {
    let path = asset.path.trim_start_matches('/');
    if let StorageBackend::Unresolved { reason } = &asset.storage {
        tracing::error!(path = %asset.path, %reason, "could not resolve asset storage");
    }
    match asset.storage.bucket() {
        Some(bucket) if settings.include_bucket_prefix => format!("{bucket}/{path}"),
        _ => path.to_string(),
    }
}

/// [`ImageTransformBackend`] over a Thumbor server.
#[derive(Debug, Clone)]
pub struct ThumborBackend {
    settings: BuilderSettings,
}

impl ThumborBackend {
    pub fn new(settings: BuilderSettings) -> Self {
        Self { settings }
    }
}

impl ImageTransformBackend for ThumborBackend {
    fn transform_url(
        &self,
        asset: &AssetDescriptor,
        transform: &TransformDescriptor,
    ) -> Option<String> {
        build_url(asset, transform, &self.settings, None)
    }

    fn alternate_format_url(
        &self,
        asset: &AssetDescriptor,
        transform: &TransformDescriptor,
        format: &str,
    ) -> Option<String> {
        build_url(asset, transform, &self.settings, Some(format))
    }

    /// Thumbor has no invalidation API.
    fn purge_url(&self, _url: &str) -> bool {
        false
    }

    fn asset_uri(&self, asset: &AssetDescriptor) -> String {
        asset_uri(asset, &self.settings)
    }
}
