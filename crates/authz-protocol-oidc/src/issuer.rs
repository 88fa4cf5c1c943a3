//! Credential issuance boundary.
//!
//! The engine never mints codes or tokens itself. It drives an injected
//! [`CredentialIssuer`] and collects what it returns into an
//! [`IssuedCredentialBundle`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::context::SecurityContext;
use crate::error::IssuanceError;
use crate::request::AuthorizationRequest;
use crate::types::{GrantClassification, TokenType};

/// An access token as returned by the issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenRecord {
    /// Token value. May contain characters reserved in URLs.
    pub value: String,

    /// Token type.
    #[serde(default)]
    pub token_type: TokenType,

    /// Absolute expiry.
    #[serde(with = "authz_core::timestamp")]
    pub expires_at: DateTime<Utc>,

    /// Granted scope, space-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Extra response parameters such as `jti`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_information: BTreeMap<String, String>,
}

impl AccessTokenRecord {
    /// Creates a bearer token record.
    #[must_use]
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            token_type: TokenType::Bearer,
            expires_at,
            scope: None,
            additional_information: BTreeMap::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Adds an extra response parameter.
    #[must_use]
    pub fn with_information(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_information.insert(key.into(), value.into());
        self
    }
}

/// Returns `now` plus `seconds`, or [`IssuanceError::Generation`] when the
/// result does not fit in a timestamp.
///
/// # Errors
///
/// Fails if `seconds` is out of range for a [`TimeDelta`] or the sum
/// overflows.
pub fn expires_after(now: DateTime<Utc>, seconds: i64) -> Result<DateTime<Utc>, IssuanceError> {
    TimeDelta::try_seconds(seconds)
        .and_then(|lifespan| now.checked_add_signed(lifespan))
        .ok_or_else(|| IssuanceError::Generation(format!("lifespan of {seconds}s is out of range")))
}

/// Issues authorization artifacts.
///
/// Implementations may block on storage or signing. The engine calls at most
/// one method at a time per request and never retries; any failure aborts the
/// whole authorization.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Issues and persists an authorization code.
    async fn issue_authorization_code(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
    ) -> Result<String, IssuanceError>;

    /// Issues an access token for the classified grant.
    async fn issue_access_token(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
        classification: GrantClassification,
    ) -> Result<AccessTokenRecord, IssuanceError>;

    /// Issues a serialized ID token.
    async fn issue_id_token(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
    ) -> Result<String, IssuanceError>;
}

/// Everything issued for a single authorization request.
///
/// Owned by that request and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct IssuedCredentialBundle {
    /// Access token. Absent only on the plain code path.
    pub access_token: Option<AccessTokenRecord>,

    /// Serialized ID token.
    pub id_token_value: Option<String>,

    /// Authorization code.
    pub authorization_code: Option<String>,

    /// State echoed from the request.
    pub state: Option<String>,
}

impl IssuedCredentialBundle {
    /// Returns the access token value.
    #[must_use]
    pub fn access_token_value(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.value.as_str())
    }

    /// Returns the access token expiry.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.access_token.as_ref().map(|t| t.expires_at)
    }

    /// Returns the granted scope.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.access_token.as_ref().and_then(|t| t.scope.as_deref())
    }
}
