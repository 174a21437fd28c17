//! Requested transformation: geometry, crop anchoring, output encoding.

mod position;
mod sharpen;

pub use position::{parse_position, HAlign, VAlign};
pub use sharpen::{SharpenPolicy, DEFAULT_SHARPEN_PERCENT, DOWNSCALE_SHARPEN_RATIO};

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// How the image is fitted into the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Fit within the box, keeping the aspect ratio, no cropping.
    Fit,
    /// Resize to exactly the box, ignoring the aspect ratio.
    Stretch,
    /// Fill the box and crop the overflow. Any unrecognized mode lands here.
    #[default]
    #[serde(other)]
    Crop,
}

impl FromStr for TransformMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "fit" => TransformMode::Fit,
            "stretch" => TransformMode::Stretch,
            _ => TransformMode::Crop,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformDescriptor {
    #[serde(default)]
    pub mode: TransformMode,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Crop anchor such as `top-left` or `center-center`.
    #[serde(default)]
    pub position: Option<String>,
    /// Output format such as `jpg` or `webp`.
    #[serde(default)]
    pub format: Option<String>,
    /// 0 to 100; zero means "unset".
    #[serde(default)]
    pub quality: Option<u8>,
    /// Legacy progressive-encoding option. Never reaches the URL.
    #[serde(default)]
    pub interlace: Option<String>,
}

impl TransformDescriptor {
    /// Output format as Thumbor names it, or `None` when empty.
    pub fn normalized_format(&self) -> Option<String> {
        self.format
            .as_deref()
            .map(|f| f.replace("jpg", "jpeg"))
            .filter(|f| !f.is_empty())
    }

    /// The transform's own quality if set and non-zero, else `default_quality`.
    /// `None` when both are zero.
    pub fn effective_quality(&self, default_quality: u8) -> Option<u8> {
        let q = self.quality.filter(|&q| q != 0).unwrap_or(default_quality);
        (q != 0).then_some(q)
    }

    /// Crop anchor parsed from [`position`](Self::position).
    pub fn alignment(&self) -> Option<(VAlign, HAlign)> {
        self.position.as_deref().and_then(parse_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_str_defaults_to_crop() {
        assert_eq!("fit".parse::<TransformMode>().unwrap(), TransformMode::Fit);
        assert_eq!(
            "stretch".parse::<TransformMode>().unwrap(),
            TransformMode::Stretch
        );
        assert_eq!("crop".parse::<TransformMode>().unwrap(), TransformMode::Crop);
        assert_eq!(
            "letterbox".parse::<TransformMode>().unwrap(),
            TransformMode::Crop
        );
    }

    #[test]
    fn mode_deserializes_unknown_as_crop() {
        let t: TransformDescriptor = serde_json::from_str(r#"{"mode":"letterbox"}"#).unwrap();
        assert_eq!(t.mode, TransformMode::Crop);
        let t: TransformDescriptor = serde_json::from_str(r#"{"mode":"fit","width":10}"#).unwrap();
        assert_eq!(t.mode, TransformMode::Fit);
        assert_eq!(t.width, Some(10));
        assert_eq!(t.height, None);
    }

    #[test]
    fn format_normalization() {
        let mut t = TransformDescriptor {
            format: Some("jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(t.normalized_format().as_deref(), Some("jpeg"));
        t.format = Some("webp".to_string());
        assert_eq!(t.normalized_format().as_deref(), Some("webp"));
        t.format = Some(String::new());
        assert_eq!(t.normalized_format(), None);
        t.format = None;
        assert_eq!(t.normalized_format(), None);
    }

    #[test]
    fn quality_fallback() {
        let mut t = TransformDescriptor::default();
        assert_eq!(t.effective_quality(82), Some(82));
        t.quality = Some(0);
        assert_eq!(t.effective_quality(82), Some(82));
        t.quality = Some(60);
        assert_eq!(t.effective_quality(82), Some(60));
        t.quality = None;
        assert_eq!(t.effective_quality(0), None);
    }
}
