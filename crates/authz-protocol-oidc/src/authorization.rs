//! Authorization endpoint decision flow.
//!
//! Validates the redirect URI, classifies the requested response types,
//! drives the [`CredentialIssuer`] and hands the result to the
//! [`RedirectResponseBuilder`].

use std::sync::Arc;

use crate::context::SecurityContext;
use crate::error::{OidcError, OidcResult};
use crate::issuer::{CredentialIssuer, IssuedCredentialBundle};
use crate::redirect::{validate_redirect_uri, RedirectResponseBuilder, RedirectTarget};
use crate::request::AuthorizationRequest;
use crate::resolver::classify;
use crate::session_state::SessionStateCalculator;
use crate::types::{GrantClassification, ResponseType};

/// Turns validated authorization requests into redirect targets.
#[derive(Clone)]
pub struct AuthorizationEngine {
    issuer: Arc<dyn CredentialIssuer>,
    builder: RedirectResponseBuilder,
}

impl AuthorizationEngine {
    /// Creates an engine around an issuer.
    #[must_use]
    pub fn new(issuer: Arc<dyn CredentialIssuer>) -> Self {
        Self {
            issuer,
            builder: RedirectResponseBuilder::default(),
        }
    }

    /// Uses a session state calculator with a custom salt length.
    #[must_use]
    pub const fn with_session_state(mut self, calculator: SessionStateCalculator) -> Self {
        self.builder = RedirectResponseBuilder::new(calculator);
        self
    }

    /// Issues everything the request asked for and assembles the redirect.
    ///
    /// Nothing is issued for a request that fails validation. Issuance runs
    /// in a fixed order: access token, authorization code, ID token.
    ///
    /// # Errors
    ///
    /// Returns [`OidcError::InvalidRequest`] for a bad redirect URI or an
    /// unclassifiable response type set, and [`OidcError::Issuance`] when the
    /// issuer fails. Nothing is retried.
    pub async fn authorize(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
    ) -> OidcResult<RedirectTarget> {
        let classification = match Self::preflight(request) {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!(client_id = %request.client_id, error = %e, "authorization request rejected");
                return Err(e);
            }
        };

        let bundle = self
            .issue(request, context, classification)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    client_id = %request.client_id,
                    grant = %classification,
                    error = %e,
                    "credential issuance failed"
                );
            })?;

        self.builder.build(request, &bundle, context)
    }

    fn preflight(request: &AuthorizationRequest) -> OidcResult<GrantClassification> {
        validate_redirect_uri(request.redirect_uri.as_deref())?;
        classify(&request.response_types)
    }

    async fn issue(
        &self,
        request: &AuthorizationRequest,
        context: &SecurityContext,
        classification: GrantClassification,
    ) -> Result<IssuedCredentialBundle, OidcError> {
        let types = &request.response_types;
        let mut bundle = IssuedCredentialBundle {
            state: request.state.clone(),
            ..IssuedCredentialBundle::default()
        };

        if !types.is_code_only() {
            bundle.access_token = Some(
                self.issuer
                    .issue_access_token(request, context, classification)
                    .await?,
            );
        }
        if types.contains(ResponseType::Code) {
            bundle.authorization_code =
                Some(self.issuer.issue_authorization_code(request, context).await?);
        }
        if types.contains(ResponseType::IdToken) {
            bundle.id_token_value = Some(self.issuer.issue_id_token(request, context).await?);
        }

        tracing::debug!(
            client_id = %request.client_id,
            grant = %classification,
            access_token = bundle.access_token.is_some(),
            code = bundle.authorization_code.is_some(),
            id_token = bundle.id_token_value.is_some(),
            "credentials issued"
        );
        Ok(bundle)
    }
}

impl std::fmt::Debug for AuthorizationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationEngine")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}
