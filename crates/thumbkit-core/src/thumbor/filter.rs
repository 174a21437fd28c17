//! Thumbor filters, rendered as `name(arg,arg)`.

use std::fmt;

use crate::asset::FocalPoint;

/// Pixel box handed to the `focal` filter.
///
/// Deliberately not clamped to the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocalBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl FocalBox {
    /// 2x2 pixel box centred on `point` in an image of `width` x `height`.
    pub fn around(point: FocalPoint, width: u32, height: u32) -> Self {
        let x = (point.x * f64::from(width)).floor() as i64;
        let y = (point.y * f64::from(height)).floor() as i64;
        Self {
            left: x - 1,
            top: y - 1,
            right: x + 1,
            bottom: y + 1,
        }
    }
}

impl fmt::Display for FocalBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}:{}x{}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Stretch,
    Focal(FocalBox),
    Format(String),
    Quality(u8),
    Sharpen {
        amount: f32,
        radius: f32,
        luminance_only: bool,
    },
}

impl Filter {
    /// The sharpen filter used for resized images.
    pub fn scaled_sharpen() -> Self {
        Filter::Sharpen {
            amount: 0.5,
            radius: 0.5,
            luminance_only: true,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Stretch => f.write_str("stretch()"),
            Filter::Focal(b) => write!(f, "focal({b})"),
            Filter::Format(fmt_name) => write!(f, "format({fmt_name})"),
            Filter::Quality(q) => write!(f, "quality({q})"),
            Filter::Sharpen {
                amount,
                radius,
                luminance_only,
            } => write!(f, "sharpen({amount},{radius},{luminance_only})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_box_centre_of_100_by_200() {
        let b = FocalBox::around(FocalPoint { x: 0.5, y: 0.5 }, 100, 200);
        assert_eq!(b.to_string(), "49x99:51x101");
    }

    #[test]
    fn focal_box_is_not_clamped() {
        let b = FocalBox::around(FocalPoint { x: 0.0, y: 1.0 }, 100, 50);
        assert_eq!(b.to_string(), "-1x49:1x51");
    }

    #[test]
    fn focal_box_floors_fractional_pixels() {
        let b = FocalBox::around(FocalPoint { x: 0.333, y: 0.999 }, 10, 10);
        // 3.33 -> 3, 9.99 -> 9
        assert_eq!(b, FocalBox { left: 2, top: 8, right: 4, bottom: 10 });
    }

    #[test]
    fn filter_rendering() {
        assert_eq!(Filter::Stretch.to_string(), "stretch()");
        assert_eq!(Filter::Format("webp".into()).to_string(), "format(webp)");
        assert_eq!(Filter::Quality(82).to_string(), "quality(82)");
        assert_eq!(
            Filter::scaled_sharpen().to_string(),
            "sharpen(0.5,0.5,true)"
        );
    }
}
