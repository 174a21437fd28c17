//! `thumbkit url <path>` – print the transform URL for one asset.

use anyhow::Result;
use thumbkit_core::config::resolve_placeholder;
use thumbkit_core::{AssetDescriptor, ImageTransformBackend, StorageBackend, TransformDescriptor};

use crate::cli::UrlArgs;

/// `lookup` resolves a `$NAME` bucket, as done for the `[thumbor]` options.
fn asset_from_args<F>(args: &UrlArgs, lookup: F) -> Result<AssetDescriptor>
where
    F: Fn(&str) -> Option<String>,
{
    let mut asset = match &args.extension {
        Some(ext) => AssetDescriptor {
            extension: ext.trim_start_matches('.').to_ascii_lowercase(),
            width: args.asset_width,
            height: args.asset_height,
            focal_point: None,
            path: args.path.clone(),
            storage: StorageBackend::Filesystem,
        },
        None => AssetDescriptor::from_path(&args.path, args.asset_width, args.asset_height)?,
    };
    asset.focal_point = args.focal;
    if let Some(bucket) = &args.bucket {
        asset.storage = StorageBackend::S3 {
            bucket: resolve_placeholder(bucket, lookup),
        };
    }
    Ok(asset)
}

fn transform_from_args(args: &UrlArgs) -> TransformDescriptor {
    TransformDescriptor {
        // FromStr for TransformMode cannot fail.
        mode: args.mode.parse().unwrap_or_default(),
        width: args.width,
        height: args.height,
        position: args.position.clone(),
        format: args.format.clone(),
        quality: args.quality,
        interlace: args.interlace.clone(),
    }
}

pub fn run_url(backend: &dyn ImageTransformBackend, args: &UrlArgs) -> Result<()> {
    let asset = asset_from_args(args, |name| std::env::var(name).ok())?;
    let transform = transform_from_args(args);
    let url = match args.alternate_format.as_deref() {
        Some(format) => backend.alternate_format_url(&asset, &transform, format),
        None => backend.transform_url(&asset, &transform),
    };
    match url {
        Some(url) => println!("{url}"),
        None => println!("Not transformed: .{} assets are served as-is.", asset.extension),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use thumbkit_core::{FocalPoint, TransformMode};

    use crate::cli::{Cli, CliCommand};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn url_args(args: &[&str]) -> UrlArgs {
        match Cli::try_parse_from(args).unwrap().command {
            CliCommand::Url(a) => a,
            _ => panic!("expected Url"),
        }
    }

    #[test]
    fn asset_from_path_and_flags() {
        let args = url_args(&[
            "thumbkit", "url", "photos/cat.JPG", "--asset-width", "100", "--asset-height", "200",
            "--focal", "0.5,0.5", "--bucket", "media",
        ]);
        let asset = asset_from_args(&args, no_env).unwrap();
        assert_eq!(asset.extension, "jpg");
        assert_eq!(asset.focal_point, Some(FocalPoint { x: 0.5, y: 0.5 }));
        assert_eq!(asset.storage.bucket(), Some("media"));
    }

    #[test]
    fn bucket_placeholder_uses_lookup() {
        let args = url_args(&[
            "thumbkit", "url", "a.jpg", "--asset-width", "1", "--asset-height", "1",
            "--bucket", "$S3_BUCKET",
        ]);
        let lookup = |name: &str| (name == "S3_BUCKET").then(|| "media".to_string());
        let asset = asset_from_args(&args, lookup).unwrap();
        assert_eq!(asset.storage.bucket(), Some("media"));

        let asset = asset_from_args(&args, no_env).unwrap();
        assert_eq!(asset.storage.bucket(), Some("$S3_BUCKET"));
    }

    #[test]
    fn explicit_extension_overrides_path() {
        let args = url_args(&[
            "thumbkit", "url", "blobs/1234", "--asset-width", "1", "--asset-height", "1",
            "--extension", ".SVG",
        ]);
        let asset = asset_from_args(&args, no_env).unwrap();
        assert!(asset.is_vector());
        assert_eq!(asset.storage, StorageBackend::Filesystem);
    }

    #[test]
    fn path_without_extension_needs_flag() {
        let args = url_args(&[
            "thumbkit", "url", "blobs/1234", "--asset-width", "1", "--asset-height", "1",
        ]);
        assert!(asset_from_args(&args, no_env).is_err());
    }

    #[test]
    fn transform_from_flags() {
        let args = url_args(&[
            "thumbkit", "url", "a.jpg", "--asset-width", "1", "--asset-height", "1",
            "--mode", "stretch", "-W", "300", "--format", "jpg", "--quality", "70",
        ]);
        let t = transform_from_args(&args);
        assert_eq!(t.mode, TransformMode::Stretch);
        assert_eq!(t.width, Some(300));
        assert_eq!(t.height, None);
        assert_eq!(t.normalized_format().as_deref(), Some("jpeg"));
        assert_eq!(t.quality, Some(70));
        assert!(t.interlace.is_none());
    }
}
