//! OpenID Connect Session Management `session_state`.
//!
//! `session_state = hex(SHA-256(client_id + " " + origin + " " + session_id + " " + salt)) + "." + salt`
//!
//! The relying party's check-session iframe recomputes the hash with the salt
//! it receives, so the raw session id never leaves the identity provider.

use url::Url;

/// Computes `session_state` values.
#[derive(Debug, Clone, Copy)]
pub struct SessionStateCalculator {
    salt_bytes: usize,
}

impl SessionStateCalculator {
    /// Creates a calculator drawing `salt_bytes` random bytes per value.
    #[must_use]
    pub const fn new(salt_bytes: usize) -> Self {
        Self { salt_bytes }
    }

    /// Computes a fresh `session_state` with a random salt.
    #[must_use]
    pub fn calculate(&self, session_id: &str, client_id: &str, origin: &str) -> String {
        let salt = authz_crypto::random_hex(self.salt_bytes);
        Self::calculate_with_salt(session_id, client_id, origin, &salt)
    }

    /// Computes a `session_state` for a known salt.
    #[must_use]
    pub fn calculate_with_salt(
        session_id: &str,
        client_id: &str,
        origin: &str,
        salt: &str,
    ) -> String {
        let text = format!("{client_id} {origin} {session_id} {salt}");
        let hash = authz_crypto::sha256_hex(text.as_bytes());
        format!("{hash}.{salt}")
    }

    /// Checks a `session_state` value against the current session.
    #[must_use]
    pub fn verify(session_state: &str, session_id: &str, client_id: &str, origin: &str) -> bool {
        session_state
            .rsplit_once('.')
            .is_some_and(|(_, salt)| {
                Self::calculate_with_salt(session_id, client_id, origin, salt) == session_state
            })
    }
}

impl Default for SessionStateCalculator {
    fn default() -> Self {
        Self::new(32)
    }
}

/// Derives the origin (`scheme://host[:port]`) of a redirect URI.
///
/// Non-special schemes such as `myapp://cb` have an opaque origin in the URL
/// standard, so their scheme, host and port are serialized directly.
/// Scheme-less values fall back to their authority text, up to the first
/// `/`, `?` or `#`.
#[must_use]
pub fn redirect_origin(redirect_uri: &str) -> String {
    if redirect_uri.contains("://") {
        if let Ok(url) = Url::parse(redirect_uri) {
            let origin = url.origin();
            if origin.is_tuple() {
                return origin.ascii_serialization();
            }
            if let Some(host) = url.host_str() {
                return match url.port() {
                    Some(port) => format!("{}://{host}:{port}", url.scheme()),
                    None => format!("{}://{host}", url.scheme()),
                };
            }
        }
    }
    redirect_uri
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}
