//! Signed Thumbor URLs for CMS image transforms.
//!
//! [`build_url`] maps an [`AssetDescriptor`] and a [`TransformDescriptor`]
//! onto a Thumbor URL under the given [`BuilderSettings`]. It is pure: no
//! I/O, no environment access, no shared state.

pub mod asset;
pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod settings;
pub mod settings_form;
pub mod thumbor;
pub mod transform;

pub use asset::{AssetDescriptor, FocalPoint, StorageBackend};
pub use backend::{build_url, ImageTransformBackend, ThumborBackend};
pub use settings::BuilderSettings;
pub use transform::{SharpenPolicy, TransformDescriptor, TransformMode};
