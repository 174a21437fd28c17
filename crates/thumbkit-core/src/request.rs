//! Batches of transform requests, as read from a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::asset::{AssetDescriptor, StorageBackend};
use crate::backend::ImageTransformBackend;
use crate::config::resolve_placeholder;
use crate::transform::TransformDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub asset: AssetDescriptor,
    #[serde(default)]
    pub transform: TransformDescriptor,
    /// Also re-encode as this format, e.g. `webp`.
    #[serde(default)]
    pub alternate_format: Option<String>,
}

impl TransformRequest {
    /// Resolves a `$NAME` bucket through `lookup`, as done for the
    /// `[thumbor]` options.
    pub fn resolve_placeholders<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let StorageBackend::S3 { bucket } = &mut self.asset.storage {
            *bucket = resolve_placeholder(bucket, lookup);
        }
    }

    pub fn url(&self, backend: &dyn ImageTransformBackend) -> Option<String> {
        match self.alternate_format.as_deref() {
            Some(format) => backend.alternate_format_url(&self.asset, &self.transform, format),
            None => backend.transform_url(&self.asset, &self.transform),
        }
    }
}

/// Parses a JSON array of requests.
pub fn parse_batch(json: &str) -> Result<Vec<TransformRequest>> {
    serde_json::from_str(json).context("parse transform requests")
}

pub fn load_batch(path: &Path) -> Result<Vec<TransformRequest>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_batch(&data).with_context(|| format!("in {}", path.display()))
}
