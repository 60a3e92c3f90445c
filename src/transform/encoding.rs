//! Encoding and digest transforms.
//!
//! The MD5 digest is for display only and carries no security meaning.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::{Digest, Md5};

/// Number of encoded characters kept in the base64 preview.
pub const BASE64_PREVIEW_LEN: usize = 32;

/// Base64-encodes the UTF-8 bytes of `text` and keeps the first 32 characters.
///
/// # Examples
///
/// ```
/// use transform_dashboard::transform::base64_preview;
///
/// assert_eq!(base64_preview("hi"), "Base64: aGk=");
/// ```
pub fn base64_preview(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());

    // The standard alphabet is pure ASCII, so byte slicing is safe here.
    if encoded.len() > BASE64_PREVIEW_LEN {
        format!("Base64: {}...", &encoded[..BASE64_PREVIEW_LEN])
    } else {
        format!("Base64: {}", encoded)
    }
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
pub fn md5_digest(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn md5_hash(text: &str) -> String {
    format!("MD5: {}", md5_digest(text))
}
