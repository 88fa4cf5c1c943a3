//! Authorization code persistence.
//!
//! Codes are stored under a hash of their value so a leaked store cannot be
//! replayed against the token endpoint.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::IssuanceError;
use crate::issuer::expires_after;

/// Stored authorization code data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuthCode {
    /// Hash of the code value.
    pub code_hash: String,

    /// Client ID that requested the code.
    pub client_id: String,

    /// Subject (user) ID.
    pub user_id: String,

    /// Redirect URI used in the request.
    pub redirect_uri: String,

    /// Requested scope (space-separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Nonce from the authorization request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    /// Identity provider session the code is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// When the code was created.
    #[serde(with = "authz_core::timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the code expires.
    #[serde(with = "authz_core::timestamp")]
    pub expires_at: DateTime<Utc>,
}

/// Parameters for creating a new authorization code.
pub struct AuthCodeParams {
    /// The raw authorization code value.
    pub code: String,
    /// OAuth `client_id`.
    pub client_id: String,
    /// User ID.
    pub user_id: String,
    /// Redirect URI.
    pub redirect_uri: String,
    /// TTL in seconds.
    pub ttl_seconds: i64,
}

impl StoredAuthCode {
    /// Creates a new stored authorization code from parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IssuanceError::Generation`] if the TTL puts the expiry out
    /// of the representable range.
    pub fn new(params: AuthCodeParams) -> Result<Self, IssuanceError> {
        let now = Utc::now();
        let expires_at = expires_after(now, params.ttl_seconds)?;
        Ok(Self {
            code_hash: hash_code(&params.code),
            client_id: params.client_id,
            user_id: params.user_id,
            redirect_uri: params.redirect_uri,
            scope: None,
            nonce: None,
            session_id: None,
            created_at: now,
            expires_at,
        })
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the nonce.
    #[must_use]
    pub fn with_nonce(mut self, nonce: Option<String>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Binds the code to a session.
    #[must_use]
    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }

    /// Checks if the code has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Verifies the code value.
    #[must_use]
    pub fn verify_code(&self, code: &str) -> bool {
        hash_code(code) == self.code_hash
    }
}

/// Hashes an authorization code for storage.
#[must_use]
pub fn hash_code(code: &str) -> String {
    authz_crypto::sha256_base64url(code.as_bytes())
}

/// Storage for issued authorization codes.
#[async_trait]
pub trait AuthCodeStore: Send + Sync {
    /// Stores an authorization code.
    async fn store_code(&self, code: &StoredAuthCode) -> Result<(), IssuanceError>;

    /// Removes and returns a code, so each code redeems at most once.
    async fn consume_code(&self, code_hash: &str) -> Result<Option<StoredAuthCode>, IssuanceError>;

    /// Removes all expired codes, returning how many were dropped.
    async fn remove_expired_codes(&self) -> Result<u64, IssuanceError>;
}

/// In-memory authorization code store.
#[derive(Debug, Default)]
pub struct InMemoryAuthCodeStore {
    codes: RwLock<HashMap<String, StoredAuthCode>>,
}

impl InMemoryAuthCodeStore {
    /// Creates a new in-memory auth code store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes currently held.
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

#[async_trait]
impl AuthCodeStore for InMemoryAuthCodeStore {
    async fn store_code(&self, code: &StoredAuthCode) -> Result<(), IssuanceError> {
        self.codes
            .write()
            .await
            .insert(code.code_hash.clone(), code.clone());
        Ok(())
    }

    async fn consume_code(&self, code_hash: &str) -> Result<Option<StoredAuthCode>, IssuanceError> {
        Ok(self.codes.write().await.remove(code_hash))
    }

    async fn remove_expired_codes(&self) -> Result<u64, IssuanceError> {
        let mut codes = self.codes.write().await;
        let now = Utc::now();
        let initial_len = codes.len();
        codes.retain(|_, code| code.expires_at > now);
        Ok((initial_len - codes.len()) as u64)
    }
}
