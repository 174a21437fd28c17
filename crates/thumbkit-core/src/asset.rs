//! Read-only view of a stored image, as handed over by the asset manager.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DescriptorError;

/// Normalized focal point; both coordinates are expected in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl FromStr for FocalPoint {
    type Err = DescriptorError;

    /// Parses `"x,y"`, e.g. `"0.5,0.25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DescriptorError::FocalPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x: f64 = x.trim().parse().map_err(|_| err())?;
        let y: f64 = y.trim().parse().map_err(|_| err())?;
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(err());
        }
        Ok(Self { x, y })
    }
}

/// Where the asset's bytes live, as far as URL construction cares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local or otherwise bucket-less storage.
    #[default]
    Filesystem,
    /// S3-compatible object storage.
    S3 { bucket: String },
    /// The host could not resolve the asset's volume.
    Unresolved { reason: String },
}

impl StorageBackend {
    /// Bucket name, if this backend exposes one.
    pub fn bucket(&self) -> Option<&str> {
        match self {
            StorageBackend::S3 { bucket } if !bucket.is_empty() => Some(bucket.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// File extension without the dot, e.g. `jpg`.
    pub extension: String,
    /// Pixel width of the original.
    pub width: u32,
    /// Pixel height of the original.
    pub height: u32,
    #[serde(default)]
    pub focal_point: Option<FocalPoint>,
    /// Path of the asset relative to its storage root.
    pub path: String,
    #[serde(default)]
    pub storage: StorageBackend,
}

impl AssetDescriptor {
    /// Descriptor for `path`, taking the extension from the file name.
    pub fn from_path(path: &str, width: u32, height: u32) -> Result<Self, DescriptorError> {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let extension = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => return Err(DescriptorError::MissingExtension(path.to_string())),
        };
        Ok(Self {
            extension,
            width,
            height,
            focal_point: None,
            path: path.to_string(),
            storage: StorageBackend::Filesystem,
        })
    }

    /// Vector images are never proxied through a raster transform service.
    pub fn is_vector(&self) -> bool {
        self.extension.eq_ignore_ascii_case("svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_point_parses_pair() {
        let fp: FocalPoint = "0.5, 0.25".parse().unwrap();
        assert_eq!(fp, FocalPoint { x: 0.5, y: 0.25 });
    }

    #[test]
    fn focal_point_rejects_out_of_range_and_garbage() {
        assert!("1.5,0.5".parse::<FocalPoint>().is_err());
        assert!("0.5".parse::<FocalPoint>().is_err());
        assert!("a,b".parse::<FocalPoint>().is_err());
    }

    #[test]
    fn from_path_derives_extension() {
        let asset = AssetDescriptor::from_path("photos/Cat.JPG", 640, 480).unwrap();
        assert_eq!(asset.extension, "jpg");
        assert_eq!(asset.storage, StorageBackend::Filesystem);
        assert!(AssetDescriptor::from_path("photos/.hidden", 1, 1).is_err());
        assert!(AssetDescriptor::from_path("photos/noext", 1, 1).is_err());
    }

    #[test]
    fn svg_is_vector_in_any_case() {
        let mut asset = AssetDescriptor::from_path("logo.svg", 10, 10).unwrap();
        assert!(asset.is_vector());
        asset.extension = "SVG".to_string();
        assert!(asset.is_vector());
    }

    #[test]
    fn bucket_only_for_named_s3() {
        assert_eq!(StorageBackend::Filesystem.bucket(), None);
        assert_eq!(
            StorageBackend::S3 {
                bucket: "media".to_string()
            }
            .bucket(),
            Some("media")
        );
        assert_eq!(
            StorageBackend::S3 {
                bucket: String::new()
            }
            .bucket(),
            None
        );
    }

    #[test]
    fn storage_deserializes_tagged() {
        let s: StorageBackend = serde_json::from_str(r#"{"kind":"s3","bucket":"b"}"#).unwrap();
        assert_eq!(s.bucket(), Some("b"));
        let asset: AssetDescriptor = serde_json::from_str(
            r#"{"extension":"png","width":1,"height":2,"path":"a.png"}"#,
        )
        .unwrap();
        assert_eq!(asset.storage, StorageBackend::Filesystem);
        assert!(asset.focal_point.is_none());
    }
}
