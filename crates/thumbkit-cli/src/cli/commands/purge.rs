//! `thumbkit purge <url>`

use thumbkit_core::ImageTransformBackend;

pub fn run_purge(backend: &dyn ImageTransformBackend, url: &str) {
    if backend.purge_url(url) {
        println!("Purged {url}");
    } else {
        println!("Purging is not supported by this backend; {url} left as is.");
    }
}
