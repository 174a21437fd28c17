//! CLI for thumbkit.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::Path;
use thumbkit_core::config::{self, ThumbkitConfig};
use thumbkit_core::{BuilderSettings, FocalPoint, ImageTransformBackend, ThumborBackend};

use commands::{run_batch, run_purge, run_settings, run_url};

/// Top-level CLI for thumbkit.
#[derive(Debug, Parser)]
#[command(name = "thumbkit")]
#[command(about = "thumbkit: signed Thumbor URLs for image transforms", long_about = None)]
pub struct Cli {
    /// Log everything at debug level (RUST_LOG still wins).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the transform URL for one asset.
    Url(UrlArgs),

    /// Print one URL per request in a JSON file ("-" when unsupported).
    Batch {
        /// Path to a JSON array of {asset, transform, alternate_format} objects.
        path: String,
    },

    /// Ask the backend to invalidate a generated URL.
    Purge {
        /// Previously generated transform URL.
        url: String,
    },

    /// Show the Thumbor settings form with current values.
    Settings,
}

#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    /// Asset path relative to its storage root.
    pub path: String,

    /// Pixel width of the original.
    #[arg(long, value_name = "PX")]
    pub asset_width: u32,

    /// Pixel height of the original.
    #[arg(long, value_name = "PX")]
    pub asset_height: u32,

    /// Asset extension; taken from the path when omitted.
    #[arg(long)]
    pub extension: Option<String>,

    /// Focal point as "x,y", both in 0..=1.
    #[arg(long, value_name = "X,Y")]
    pub focal: Option<FocalPoint>,

    /// S3 bucket the asset lives in.
    #[arg(long)]
    pub bucket: Option<String>,

    /// fit, stretch, or crop (anything else crops).
    #[arg(long, default_value = "crop")]
    pub mode: String,

    /// Target width.
    #[arg(long, short = 'W')]
    pub width: Option<u32>,

    /// Target height.
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Crop anchor, e.g. top-left or center-center.
    #[arg(long)]
    pub position: Option<String>,

    /// Output format, e.g. jpg or png.
    #[arg(long)]
    pub format: Option<String>,

    /// Output quality (1-100); 0 uses the configured default.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// Legacy interlace option; accepted and ignored with a warning.
    #[arg(long)]
    pub interlace: Option<String>,

    /// Also re-encode in this format, e.g. webp.
    #[arg(long, value_name = "FORMAT")]
    pub alternate_format: Option<String>,
}

/// The transform backend named by the configuration. Thumbor is the only one.
fn backend_from_config(cfg: &ThumbkitConfig) -> Result<Box<dyn ImageTransformBackend>> {
    let settings = cfg
        .builder_settings()
        .context("invalid [thumbor] settings")?;
    Ok(Box::new(ThumborBackend::new(settings)))
}

/// Backend for `purge`. The base URL is not validated; malformed
/// `[thumbor]` options fall back to defaults with a warning.
fn purge_backend(cfg: &ThumbkitConfig) -> Box<dyn ImageTransformBackend> {
    let settings = cfg.unvalidated_settings().unwrap_or_else(|err| {
        tracing::warn!("ignoring [thumbor] settings for purge: {err}");
        BuilderSettings::default()
    });
    Box::new(ThumborBackend::new(settings))
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg.images);

        match self.command {
            CliCommand::Url(args) => run_url(backend_from_config(&cfg)?.as_ref(), &args)?,
            CliCommand::Batch { path } => {
                run_batch(backend_from_config(&cfg)?.as_ref(), Path::new(&path))?
            }
            CliCommand::Purge { url } => run_purge(purge_backend(&cfg).as_ref(), &url),
            CliCommand::Settings => run_settings(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
