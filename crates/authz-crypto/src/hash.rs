//! Digest helpers.
//!
//! SHA-256 is used where an external specification fixes the algorithm
//! (OpenID Connect session state, authorization code fingerprints).

use aws_lc_rs::digest;

/// Computes a SHA-256 hash of the input data.
#[must_use]
pub fn sha256(data: &[u8]) -> Vec<u8> {
    digest::digest(&digest::SHA256, data).as_ref().to_vec()
}

/// Computes a SHA-256 hash and returns it as lowercase hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Computes a SHA-256 hash and returns it as unpadded base64url.
#[must_use]
pub fn sha256_base64url(data: &[u8]) -> String {
    base64::Engine::encode(
        &base64::engine::general_purpose::URL_SAFE_NO_PAD,
        sha256(data),
    )
}
