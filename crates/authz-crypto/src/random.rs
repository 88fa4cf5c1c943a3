//! Cryptographically secure random generation.
//!
//! Used for authorization codes, opaque access tokens, token identifiers and
//! session state salts. Everything here draws from the thread-local CSPRNG.

use rand::distr::{Alphanumeric, SampleString};
use rand::Rng;

/// Generates `len` random bytes.
#[must_use]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Generates a random string of `len` characters from `[a-zA-Z0-9]`.
#[must_use]
pub fn random_alphanumeric(len: usize) -> String {
    let mut rng = rand::rng();
    Alphanumeric.sample_string(&mut rng, len)
}

/// Generates a URL-safe base64-encoded random string from `byte_len` bytes.
#[must_use]
pub fn random_base64url(byte_len: usize) -> String {
    base64::Engine::encode(
        &base64::engine::general_purpose::URL_SAFE_NO_PAD,
        random_bytes(byte_len),
    )
}

/// Generates `byte_len` random bytes rendered as lowercase hex.
#[must_use]
pub fn random_hex(byte_len: usize) -> String {
    hex::encode(random_bytes(byte_len))
}

/// Generates a secure random authorization code.
///
/// # Security
///
/// 32 alphanumeric characters give roughly 190 bits of entropy, well above
/// the 128 bits recommended by RFC 6749.
#[must_use]
pub fn generate_auth_code() -> String {
    random_alphanumeric(32)
}

/// Generates a 24-character token identifier suitable for a `jti` claim.
#[must_use]
pub fn generate_token_id() -> String {
    random_alphanumeric(24)
}

/// Generates an opaque bearer token value.
#[must_use]
pub fn generate_opaque_token() -> String {
    random_base64url(32)
}
