//! CLI command handlers, one per file.

mod batch;
mod purge;
mod settings;
mod url;

pub use batch::run_batch;
pub use purge::run_purge;
pub use settings::run_settings;
pub use url::run_url;
