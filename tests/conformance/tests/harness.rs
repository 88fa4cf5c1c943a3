//! Test harness for OIDC conformance testing.
//!
//! Wires an [`AuthorizationEngine`] to either the local issuer (backed by an
//! in-memory code store the tests can inspect) or a fixed-value issuer.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use authz_core::EngineConfig;
use authz_protocol_oidc::{
    AccessTokenRecord, AuthorizationEngine, AuthorizationRequest, CredentialIssuer,
    GrantClassification, InMemoryAuthCodeStore, IssuanceError, LocalCredentialIssuer, Principal,
    RedirectTarget, SecurityContext,
};

/// Standard test client ID.
pub const TEST_CLIENT_ID: &str = "test-client";

/// Standard redirect URI.
pub const TEST_REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Standard test user.
pub const TEST_USER_ID: &str = "user-123";
pub const TEST_USERNAME: &str = "testuser";

/// Standard SSO session.
pub const TEST_SESSION_ID: &str = "session-456";

/// Engine plus the stores behind it.
pub struct TestHarness {
    /// Engine under test.
    pub engine: AuthorizationEngine,
    /// Code store used by the local issuer.
    pub codes: Arc<InMemoryAuthCodeStore>,
}

impl TestHarness {
    /// Creates a harness around the local issuer.
    pub fn new() -> Self {
        let codes = Arc::new(InMemoryAuthCodeStore::new());
        let issuer = LocalCredentialIssuer::new(EngineConfig::for_testing(), codes.clone());
        Self {
            engine: AuthorizationEngine::new(Arc::new(issuer)),
            codes,
        }
    }

    /// Creates a harness around [`FixedIssuer`].
    pub fn fixed() -> Self {
        Self {
            engine: AuthorizationEngine::new(Arc::new(FixedIssuer)),
            codes: Arc::new(InMemoryAuthCodeStore::new()),
        }
    }

    /// Authorizes for the standard client and returns the redirect.
    pub async fn authorize(
        &self,
        response_type: &str,
        context: &SecurityContext,
    ) -> anyhow::Result<RedirectTarget> {
        let request = request(response_type);
        Ok(self.engine.authorize(&request, context).await?)
    }
}

/// Builds a standard request with state, scope and nonce.
pub fn request(response_type: &str) -> AuthorizationRequest {
    AuthorizationRequest::new(TEST_CLIENT_ID, TEST_REDIRECT_URI, response_type.parse().unwrap_or_default())
        .with_state("test-state-123")
        .with_scope("openid profile")
        .with_nonce("test-nonce-456")
}

/// The standard principal.
pub fn principal() -> Principal {
    Principal::new(TEST_USER_ID, TEST_USERNAME).with_email("testuser@example.com")
}

/// An authenticated caller with the standard session.
pub fn authenticated() -> SecurityContext {
    SecurityContext::authenticated(principal(), TEST_SESSION_ID)
}

/// An anonymous caller.
pub fn anonymous() -> SecurityContext {
    SecurityContext::anonymous(principal())
}

/// Issuer returning the same values every time.
pub struct FixedIssuer;

/// Access token issued by [`FixedIssuer`].
pub const FIXED_ACCESS_TOKEN: &str = "TOKEN_VALUE+=";
/// ID token issued by [`FixedIssuer`].
pub const FIXED_ID_TOKEN: &str = "idTokenValue";
/// Code issued by [`FixedIssuer`].
pub const FIXED_CODE: &str = "ABCD";

#[async_trait]
impl CredentialIssuer for FixedIssuer {
    async fn issue_authorization_code(
        &self,
        _request: &AuthorizationRequest,
        _context: &SecurityContext,
    ) -> Result<String, IssuanceError> {
        Ok(FIXED_CODE.to_string())
    }

    async fn issue_access_token(
        &self,
        _request: &AuthorizationRequest,
        _context: &SecurityContext,
        _classification: GrantClassification,
    ) -> Result<AccessTokenRecord, IssuanceError> {
        Ok(AccessTokenRecord::new(
            FIXED_ACCESS_TOKEN,
            Utc::now() + Duration::seconds(3600),
        ))
    }

    async fn issue_id_token(
        &self,
        _request: &AuthorizationRequest,
        _context: &SecurityContext,
    ) -> Result<String, IssuanceError> {
        Ok(FIXED_ID_TOKEN.to_string())
    }
}

/// Redirect URI parsing utilities for tests.
pub mod redirect {
    /// Splits a rendered redirect into its base, separator and decoded parameters.
    pub fn split(uri: &str) -> anyhow::Result<(String, char, Vec<(String, String)>)> {
        let Some(pos) = uri.find(['#', '?']) else {
            anyhow::bail!("redirect has no parameter block: {uri}");
        };
        let separator = uri[pos..].chars().next().unwrap_or('?');
        let params = url::form_urlencoded::parse(uri[pos + 1..].as_bytes())
            .into_owned()
            .collect();
        Ok((uri[..pos].to_string(), separator, params))
    }

    /// Returns the decoded value of a parameter.
    pub fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// JWT decoding utilities for tests.
pub mod jwt {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    /// Decodes a JWT payload without verification (for testing only).
    pub fn decode_payload_unverified(token: &str) -> anyhow::Result<serde_json::Value> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            anyhow::bail!("Invalid JWT format");
        }

        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1])?;
        Ok(serde_json::from_slice(&payload_bytes)?)
    }

    /// Extracts the header from a JWT without verification.
    pub fn decode_header_unverified(token: &str) -> anyhow::Result<serde_json::Value> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            anyhow::bail!("Invalid JWT format");
        }

        let header_bytes = URL_SAFE_NO_PAD.decode(parts[0])?;
        Ok(serde_json::from_slice(&header_bytes)?)
    }
}
