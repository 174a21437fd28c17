//! When to ask Thumbor to sharpen a resized image.

use serde::{Deserialize, Serialize};

/// Fixed ratio used by [`SharpenPolicy::DownscaleRatio`].
pub const DOWNSCALE_SHARPEN_RATIO: f64 = 2.0;

/// Threshold used when the config does not name one.
pub const DEFAULT_SHARPEN_PERCENT: u32 = 50;

/// Rule deciding whether a resize gets the sharpen filter.
///
/// Either axis matching is enough. The requested size of an axis the
/// transform leaves open is the asset's own size on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SharpenPolicy {
    /// `trunc(requested / original * 100) >= threshold_percent`.
    UpscalePercent { threshold_percent: u32 },
    /// `original / requested >= 2.0`.
    DownscaleRatio,
}

impl Default for SharpenPolicy {
    fn default() -> Self {
        SharpenPolicy::UpscalePercent {
            threshold_percent: DEFAULT_SHARPEN_PERCENT,
        }
    }
}

impl SharpenPolicy {
    /// `original` is `(width, height)` of the asset, `requested` the transform's
    /// target. Axes with a zero divisor are skipped.
    pub fn should_sharpen(
        &self,
        original: (u32, u32),
        requested: (Option<u32>, Option<u32>),
    ) -> bool {
        let axes = [
            (original.0, requested.0.unwrap_or(original.0)),
            (original.1, requested.1.unwrap_or(original.1)),
        ];
        axes.iter().any(|&(orig, req)| match *self {
            SharpenPolicy::UpscalePercent { threshold_percent } => {
                if orig == 0 {
                    return false;
                }
                let percent = (f64::from(req) / f64::from(orig) * 100.0) as u64;
                percent >= u64::from(threshold_percent)
            }
            SharpenPolicy::DownscaleRatio => {
                if req == 0 {
                    return false;
                }
                f64::from(orig) / f64::from(req) >= DOWNSCALE_SHARPEN_RATIO
            }
        })
    }
}
