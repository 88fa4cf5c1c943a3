//! Self-contained credential issuer.
//!
//! Mints opaque access tokens, random authorization codes kept in an
//! [`AuthCodeStore`], and unsecured ID tokens. Deployments that sign tokens
//! plug in their own [`CredentialIssuer`] instead.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use authz_core::EngineConfig;

use crate::claims::IdTokenClaims;
use crate::code_store::{AuthCodeParams, AuthCodeStore, StoredAuthCode};
use crate::context::SecurityContext;
use crate::error::IssuanceError;
use crate::issuer::{expires_after, AccessTokenRecord, CredentialIssuer};
use crate::request::AuthorizationRequest;
use crate::types::{params, GrantClassification};

/// Issuer backed by local randomness and a code store.
pub struct LocalCredentialIssuer {
    config: EngineConfig,
    code_store: Arc<dyn AuthCodeStore>,
}

impl LocalCredentialIssuer {
    /// Creates an issuer.
    #[must_use]
    pub fn new(config: EngineConfig, code_store: Arc<dyn AuthCodeStore>) -> Self {
        Self { config, code_store }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[async_trait]
impl CredentialIssuer for LocalCredentialIssuer {
    async fn issue_authorization_code(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
    ) -> Result<String, IssuanceError> {
        let code = authz_crypto::generate_auth_code();
        let stored = StoredAuthCode::new(AuthCodeParams {
            code: code.clone(),
            client_id: request.client_id.clone(),
            user_id: context.principal().user_id.clone(),
            redirect_uri: request.redirect_uri.clone().unwrap_or_default(),
            ttl_seconds: self.config.auth_code_lifespan,
        })?
        .with_scope(request.scope.clone())
        .with_nonce(request.nonce.clone())
        .with_session(context.session_id().map(str::to_string));

        self.code_store.store_code(&stored).await?;

        tracing::debug!(
            client_id = %request.client_id,
            expires_at = %authz_core::timestamp::format(&stored.expires_at),
            "authorization code stored"
        );
        Ok(code)
    }

    async fn issue_access_token(
        &self,
        request: &AuthorizationRequest,
        _context: &SecurityContext,
        classification: GrantClassification,
    ) -> Result<AccessTokenRecord, IssuanceError> {
        let expires_at = expires_after(Utc::now(), self.config.access_token_lifespan)?;
        let record = AccessTokenRecord::new(authz_crypto::generate_opaque_token(), expires_at)
            .with_scope(request.scope.clone())
            .with_information(params::JTI, authz_crypto::generate_token_id());

        tracing::debug!(
            client_id = %request.client_id,
            grant = %classification,
            "access token issued"
        );
        Ok(record)
    }

    async fn issue_id_token(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
    ) -> Result<String, IssuanceError> {
        let now = Utc::now();
        let principal = context.principal();
        let claims = IdTokenClaims::new(
            self.config.issuer.as_str(),
            principal.user_id.as_str(),
            request.client_id.as_str(),
            now,
            expires_after(now, self.config.id_token_lifespan)?,
        )
        .with_azp(request.client_id.as_str())
        .with_nonce(request.nonce.clone())
        .with_session(context.session_id().map(str::to_string))
        .with_profile(principal.username.as_str(), principal.email.clone());

        claims.to_unsecured_jwt()
    }
}
