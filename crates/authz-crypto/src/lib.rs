//! # authz-crypto
//!
//! Randomness and digests used when issuing authorization artifacts.
//!
//! - [`hash`] - SHA-256 digests in raw, hex and base64url form
//! - [`random`] - CSPRNG-backed codes, opaque tokens and salts

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod hash;
pub mod random;

pub use hash::{sha256, sha256_base64url, sha256_hex};
pub use random::{
    generate_auth_code, generate_opaque_token, generate_token_id, random_alphanumeric,
    random_base64url, random_bytes, random_hex,
};
