//! Thumbor URL grammar.
//!
//! A URL is `{server}/{signature}/{operations}/{image}` where the operations
//! come in a fixed order regardless of the order they were set in:
//! `fit-in`, `{w}x{h}`, horizontal align, vertical align, then one
//! `filters:` segment with every filter colon-joined in insertion order.
//! See <https://thumbor.readthedocs.io/en/latest/usage.html>.

mod filter;
mod sign;

pub use filter::{Filter, FocalBox};
pub use sign::{sign_path, UNSAFE};

use std::fmt;

use crate::transform::{HAlign, VAlign};

#[derive(Debug, Clone, PartialEq)]
pub struct UrlBuilder {
    server: String,
    key: String,
    image: String,
    fit_in: bool,
    size: Option<(u32, u32)>,
    halign: Option<HAlign>,
    valign: Option<VAlign>,
    filters: Vec<Filter>,
}

impl UrlBuilder {
    /// `server` is the Thumbor base URL, `key` its security key (empty for
    /// unsigned URLs), `image` the path Thumbor loads the original from.
    pub fn new(server: &str, key: &str, image: &str) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            key: key.to_string(),
            image: image.trim_start_matches('/').to_string(),
            fit_in: false,
            size: None,
            halign: None,
            valign: None,
            filters: Vec::new(),
        }
    }

    /// Fit within `width` x `height` without cropping.
    pub fn fit_in(&mut self, width: u32, height: u32) -> &mut Self {
        self.fit_in = true;
        self.resize(width, height)
    }

    /// Resize to `width` x `height`; 0 keeps that axis proportional.
    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Some((width, height));
        self
    }

    pub fn halign(&mut self, align: HAlign) -> &mut Self {
        self.halign = Some(align);
        self
    }

    pub fn valign(&mut self, align: VAlign) -> &mut Self {
        self.valign = Some(align);
        self
    }

    pub fn add_filter(&mut self, filter: Filter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// The signed part of the URL: operations followed by the image.
    pub fn path(&self) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(6);
        if self.fit_in {
            segments.push("fit-in".to_string());
        }
        if let Some((w, h)) = self.size {
            segments.push(format!("{w}x{h}"));
        }
        if let Some(h) = self.halign {
            segments.push(h.to_string());
        }
        if let Some(v) = self.valign {
            segments.push(v.to_string());
        }
        if !self.filters.is_empty() {
            let joined: Vec<String> = self.filters.iter().map(Filter::to_string).collect();
            segments.push(format!("filters:{}", joined.join(":")));
        }
        segments.push(self.image.clone());
        segments.join("/")
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        write!(
            f,
            "{}/{}/{}",
            self.server,
            sign_path(&self.key, &path),
            path
        )
    }
}
