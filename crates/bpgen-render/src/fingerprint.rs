//! Output fingerprinting.

use sha2::{Digest, Sha256};

/// Lowercase-hex SHA-256 of rendered text.
///
/// Rendering is byte-stable, so equal trees always fingerprint equal;
/// downstream snapshot tooling compares digests instead of whole files.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
