//! OIDC protocol error types.
//!
//! Error codes follow RFC 6749 §4.1.2.1 / §4.2.2.1.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while deciding and assembling an authorization response.
#[derive(Debug, Error)]
pub enum OidcError {
    /// The request cannot be classified or redirected.
    #[error("invalid_request: {0}")]
    InvalidRequest(String),

    /// A credential could not be issued.
    #[error(transparent)]
    Issuance(#[from] IssuanceError),
}

impl OidcError {
    /// Returns the OAuth 2.0 error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::Issuance(_) => "server_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Issuance(_) => 500,
        }
    }

    /// Creates an error response body for the transport layer.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_code().to_string(),
            error_description: Some(self.to_string()),
            error_uri: None,
        }
    }
}

/// Failure reported by a [`CredentialIssuer`](crate::issuer::CredentialIssuer).
#[derive(Debug, Error)]
pub enum IssuanceError {
    /// The authorization code could not be persisted.
    #[error("authorization code storage failed: {0}")]
    Storage(String),

    /// A token could not be signed or serialized.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// A credential value could not be generated.
    #[error("credential generation failed: {0}")]
    Generation(String),
}

/// OAuth 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,

    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// URI with more information about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

/// Result type for OIDC operations.
pub type OidcResult<T> = Result<T, OidcError>;
