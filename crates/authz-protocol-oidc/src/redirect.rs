//! Redirect response assembly.
//!
//! Turns an issued credential bundle into the URI the user agent is sent back
//! to. Parameter values are stored raw and percent-encoded exactly once, when
//! the URI is rendered.

use std::fmt;

use chrono::{DateTime, Utc};
use url::Url;

use crate::context::SecurityContext;
use crate::error::{OidcError, OidcResult};
use crate::issuer::IssuedCredentialBundle;
use crate::request::AuthorizationRequest;
use crate::resolver::{classify, placement};
use crate::session_state::{redirect_origin, SessionStateCalculator};
use crate::types::{params, ResponseMode};

/// The literal rendered for a token without a granted scope.
const NULL_SCOPE: &str = "null";

/// A fully assembled authorization redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    base_uri: String,
    mode: ResponseMode,
    parameters: Vec<(String, String)>,
}

impl RedirectTarget {
    /// Creates a target from raw (unencoded) parameters.
    #[must_use]
    pub fn new(
        base_uri: impl Into<String>,
        mode: ResponseMode,
        parameters: Vec<(String, String)>,
    ) -> Self {
        Self {
            base_uri: base_uri.into(),
            mode,
            parameters,
        }
    }

    /// The redirect URI the parameters are attached to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Where the parameters are placed.
    #[must_use]
    pub const fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// The raw parameters, in emission order.
    #[must_use]
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Looks up a raw parameter value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the `key=value&...` block.
    #[must_use]
    pub fn encoded_parameters(&self) -> String {
        self.parameters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders the complete redirect URI.
    #[must_use]
    pub fn to_uri(&self) -> String {
        let encoded = self.encoded_parameters();
        match self.mode {
            ResponseMode::Fragment => format!("{}#{encoded}", self.base_uri),
            ResponseMode::Query => {
                let separator = match self.base_uri.find('?') {
                    None => "?",
                    Some(_) if self.base_uri.ends_with(['?', '&']) => "",
                    Some(_) => "&",
                };
                format!("{}{separator}{encoded}", self.base_uri)
            }
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Validates the redirect URI of a request and returns it.
///
/// Scheme-less values such as `example.com` are accepted. Anything carrying a
/// `scheme://` prefix must parse as an absolute URL.
///
/// # Errors
///
/// Returns [`OidcError::InvalidRequest`] when the URI is missing, blank,
/// contains whitespace or control characters, or has a fragment.
pub fn validate_redirect_uri(redirect_uri: Option<&str>) -> OidcResult<&str> {
    let uri = redirect_uri
        .filter(|uri| !uri.trim().is_empty())
        .ok_or_else(|| OidcError::InvalidRequest("redirect_uri is required".to_string()))?;

    if uri.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(OidcError::InvalidRequest(
            "redirect_uri contains whitespace or control characters".to_string(),
        ));
    }

    // RFC 6749 §3.1.2: the endpoint URI MUST NOT include a fragment.
    if uri.contains('#') {
        return Err(OidcError::InvalidRequest(
            "redirect_uri must not contain a fragment".to_string(),
        ));
    }

    if uri.contains("://") {
        Url::parse(uri).map_err(|e| {
            OidcError::InvalidRequest(format!("redirect_uri is not a valid absolute URI: {e}"))
        })?;
    }

    Ok(uri)
}

/// Assembles [`RedirectTarget`]s from issued credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectResponseBuilder {
    session_state: SessionStateCalculator,
}

impl RedirectResponseBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new(session_state: SessionStateCalculator) -> Self {
        Self { session_state }
    }

    /// Builds the redirect, computing `expires_in` against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`OidcError::InvalidRequest`] for a missing or malformed
    /// redirect URI, or a response type set that cannot be classified.
    pub fn build(
        &self,
        request: &AuthorizationRequest,
        bundle: &IssuedCredentialBundle,
        context: &SecurityContext,
    ) -> OidcResult<RedirectTarget> {
        self.build_at(request, bundle, context, Utc::now())
    }

    /// Builds the redirect with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// Same as [`RedirectResponseBuilder::build`].
    pub fn build_at(
        &self,
        request: &AuthorizationRequest,
        bundle: &IssuedCredentialBundle,
        context: &SecurityContext,
        now: DateTime<Utc>,
    ) -> OidcResult<RedirectTarget> {
        let redirect_uri = validate_redirect_uri(request.redirect_uri.as_deref())?;
        let classification = classify(&request.response_types)?;
        let mode = placement(&request.response_types, classification);

        let mut out: Vec<(String, String)> = Vec::with_capacity(8);
        let mut push = |key: &str, value: String| out.push((key.to_string(), value));

        if let Some(token) = &bundle.access_token {
            push(params::TOKEN_TYPE, token.token_type.to_string());
            push(params::ACCESS_TOKEN, token.value.clone());
        }
        if let Some(id_token) = &bundle.id_token_value {
            push(params::ID_TOKEN, id_token.clone());
        }
        if let Some(code) = &bundle.authorization_code {
            push(params::CODE, code.clone());
        }
        if let Some(state) = &request.state {
            push(params::STATE, state.clone());
        }
        if let Some(token) = &bundle.access_token {
            let expires_in = (token.expires_at - now).num_seconds().max(0);
            push(params::EXPIRES_IN, expires_in.to_string());
            push(
                params::SCOPE,
                token.scope.clone().unwrap_or_else(|| NULL_SCOPE.to_string()),
            );
            for (key, value) in &token.additional_information {
                if !params::RESERVED.contains(&key.as_str()) {
                    push(key.as_str(), value.clone());
                }
            }
        }
        match context {
            SecurityContext::Authenticated { session_id, .. } => {
                let origin = redirect_origin(redirect_uri);
                push(
                    params::SESSION_STATE,
                    self.session_state
                        .calculate(session_id, &request.client_id, &origin),
                );
            }
            SecurityContext::Anonymous { .. } => {}
        }

        tracing::debug!(
            client_id = %request.client_id,
            grant = %classification,
            mode = %mode,
            parameters = out.len(),
            "assembled authorization redirect"
        );

        Ok(RedirectTarget::new(redirect_uri, mode, out))
    }
}
