//! `thumbkit batch <file.json>` – one URL per request.

use anyhow::Result;
use std::path::Path;
use thumbkit_core::request;
use thumbkit_core::ImageTransformBackend;

pub fn run_batch(backend: &dyn ImageTransformBackend, path: &Path) -> Result<()> {
    let mut requests = request::load_batch(path)?;
    tracing::info!(count = requests.len(), "building batch from {}", path.display());
    for req in &mut requests {
        req.resolve_placeholders(|name| std::env::var(name).ok());
        match req.url(backend) {
            Some(url) => println!("{url}"),
            None => println!("-"),
        }
    }
    Ok(())
}
