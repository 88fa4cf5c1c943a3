//! ID token claims.
//!
//! Implements the subset of `OpenID` Connect Core 1.0 §2 claims the local
//! issuer populates.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::IssuanceError;

/// ID token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    // === Required Claims ===
    /// Issuer - URL of the authorization server.
    pub iss: String,

    /// Subject - unique identifier for the user.
    pub sub: String,

    /// Audience - client ID that requested the token.
    pub aud: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at time (Unix timestamp).
    pub iat: i64,

    // === Conditionally Required Claims ===
    /// Nonce (required if provided in request).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    /// Authorized party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,

    // === Session Claims ===
    /// Session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    // === Profile Claims ===
    /// Preferred username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdTokenClaims {
    /// Creates new ID token claims issued at `issued_at`.
    #[must_use]
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        audience: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            iss: issuer.into(),
            sub: subject.into(),
            aud: audience.into(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
            nonce: None,
            azp: None,
            sid: None,
            preferred_username: None,
            email: None,
        }
    }

    /// Sets the nonce.
    #[must_use]
    pub fn with_nonce(mut self, nonce: Option<String>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the session ID.
    #[must_use]
    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.sid = session_id;
        self
    }

    /// Sets the authorized party.
    #[must_use]
    pub fn with_azp(mut self, azp: impl Into<String>) -> Self {
        self.azp = Some(azp.into());
        self
    }

    /// Sets the profile claims.
    #[must_use]
    pub fn with_profile(mut self, username: impl Into<String>, email: Option<String>) -> Self {
        self.preferred_username = Some(username.into());
        self.email = email;
        self
    }

    /// Serializes the claims as an unsecured JWT (RFC 7519 §6, `alg: none`).
    ///
    /// # Errors
    ///
    /// Returns [`IssuanceError::Signing`] if the claims cannot be serialized.
    pub fn to_unsecured_jwt(&self) -> Result<String, IssuanceError> {
        let header = serde_json::json!({ "alg": "none", "typ": "JWT" });
        let header = serde_json::to_vec(&header)
            .map_err(|e| IssuanceError::Signing(format!("header: {e}")))?;
        let payload =
            serde_json::to_vec(self).map_err(|e| IssuanceError::Signing(format!("claims: {e}")))?;
        Ok(format!(
            "{}.{}.",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        ))
    }
}
