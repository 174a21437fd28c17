use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FormError, SettingsError};
use crate::settings::{BuilderSettings, DEFAULT_IMAGE_QUALITY};
use crate::settings_form::{self, SettingsForm};
use crate::transform::SharpenPolicy;

/// Image defaults shared by every transform (`[images]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Add the sharpen filter when `sharpen_policy` matches.
    pub auto_sharpen_scaled_images: bool,
    pub sharpen_policy: SharpenPolicy,
    /// Quality used when a transform does not set one. 0 disables the filter.
    pub default_quality: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            auto_sharpen_scaled_images: false,
            sharpen_policy: SharpenPolicy::default(),
            default_quality: DEFAULT_IMAGE_QUALITY,
        }
    }
}

/// What the host's storage layer supports (`[storage]` in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// An S3-compatible volume type is installed.
    pub s3_available: bool,
}

/// Global configuration loaded from `~/.config/thumbkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbkitConfig {
    /// Thumbor options, validated through [`SettingsForm`].
    #[serde(default)]
    pub thumbor: toml::Table,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for ThumbkitConfig {
    fn default() -> Self {
        let mut thumbor = toml::Table::new();
        thumbor.insert(settings_form::BASE_URL.into(), String::new().into());
        thumbor.insert(settings_form::SECURITY_KEY.into(), String::new().into());
        thumbor.insert(settings_form::INCLUDE_BUCKET_PREFIX.into(), false.into());
        Self {
            thumbor,
            images: ImageConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl ThumbkitConfig {
    pub fn settings_form(&self) -> Result<SettingsForm, FormError> {
        SettingsForm::from_options(&self.thumbor)
    }

    /// Builder settings with `$NAME` placeholders taken from the process
    /// environment.
    pub fn builder_settings(&self) -> Result<BuilderSettings, SettingsError> {
        self.builder_settings_with(|name| std::env::var(name).ok())
    }

    /// Builder settings with placeholders resolved through `lookup`.
    pub fn builder_settings_with<F>(&self, lookup: F) -> Result<BuilderSettings, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = self.unvalidated_settings_with(lookup)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Self::builder_settings`], but the base URL is not checked.
    /// For commands that never build a URL.
    pub fn unvalidated_settings(&self) -> Result<BuilderSettings, FormError> {
        self.unvalidated_settings_with(|name| std::env::var(name).ok())
    }

    pub fn unvalidated_settings_with<F>(&self, lookup: F) -> Result<BuilderSettings, FormError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let form = self.settings_form()?;
        Ok(BuilderSettings {
            base_url: resolve_placeholder(&form.base_url, &lookup),
            security_key: resolve_placeholder(&form.security_key, &lookup),
            include_bucket_prefix: form.include_bucket_prefix,
            auto_sharpen_scaled_images: self.images.auto_sharpen_scaled_images,
            sharpen_policy: self.images.sharpen_policy,
            default_quality: self.images.default_quality,
        })
    }
}

/// Replaces a whole-value `$NAME` with `lookup(NAME)`.
///
/// Anything else, or a name `lookup` does not know, is returned unchanged.
pub fn resolve_placeholder<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let name = match value.strip_prefix('$') {
        Some(n) if !n.is_empty() && n.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => n,
        _ => return value.to_string(),
    };
    lookup(name).unwrap_or_else(|| value.to_string())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThumbkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<ThumbkitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ThumbkitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
