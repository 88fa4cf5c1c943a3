//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or validation error from the engine core.
    #[error(transparent)]
    Core(#[from] authz_core::Error),

    /// Authorization error.
    #[error("authorization failed: {0}")]
    Oidc(#[from] authz_protocol_oidc::OidcError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
