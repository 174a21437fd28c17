//! Typed errors for the fallible edges around URL construction.
//!
//! Building a URL never fails; these cover parsing host input and validating
//! settings before they reach the builder.

use thiserror::Error;

/// Failure to parse a descriptor field supplied by the host.
#[derive(Debug, Error, PartialEq)]
pub enum DescriptorError {
    #[error("invalid focal point {0:?}: expected \"x,y\" with both in 0..=1")]
    FocalPoint(String),

    #[error("asset path {0:?} has no extension")]
    MissingExtension(String),
}

/// Settings form validation failure.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("option `{0}` must be a string")]
    NotAString(String),

    #[error("option `{0}` must be a boolean")]
    NotABoolean(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Builder settings that cannot produce a usable URL.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base URL {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Form(#[from] FormError),
}
