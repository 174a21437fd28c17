//! Thumbor request signing: HMAC-SHA1 over the operation path, url-safe base64.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Signature segment Thumbor accepts when no security key is configured.
pub const UNSAFE: &str = "unsafe";

/// Signs `path` (everything after the signature segment) with `key`.
///
/// An empty key yields [`UNSAFE`].
pub fn sign_path(key: &str, path: &str) -> String {
    if key.is_empty() {
        return UNSAFE.to_string();
    }
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(path.as_bytes());
    base64::engine::general_purpose::URL_SAFE.encode(mac.finalize().into_bytes())
}
