//! Process-wide builder settings, resolved and validated by the host.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::transform::SharpenPolicy;

/// Quality used when neither the transform nor the config names one.
pub const DEFAULT_IMAGE_QUALITY: u8 = 82;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderSettings {
    /// Thumbor server, e.g. `https://thumbor.example.com`.
    pub base_url: String,
    /// Thumbor security key. Empty produces `unsafe` URLs.
    pub security_key: String,
    /// Prefix asset paths on S3 volumes with `<bucket>/`.
    pub include_bucket_prefix: bool,
    pub auto_sharpen_scaled_images: bool,
    pub sharpen_policy: SharpenPolicy,
    pub default_quality: u8,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            security_key: String::new(),
            include_bucket_prefix: false,
            auto_sharpen_scaled_images: false,
            sharpen_policy: SharpenPolicy::default(),
            default_quality: DEFAULT_IMAGE_QUALITY,
        }
    }
}

impl BuilderSettings {
    /// Checks that a non-empty base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.base_url.is_empty() {
            return Ok(());
        }
        let parsed = url::Url::parse(&self.base_url).map_err(|source| {
            SettingsError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            }
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(SettingsError::UnsupportedScheme(self.base_url.clone())),
        }
    }
}
