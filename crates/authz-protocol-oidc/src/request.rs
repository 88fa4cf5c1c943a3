//! Authorization endpoint request.

use serde::{Deserialize, Serialize};

use crate::types::ResponseTypeSet;

/// An authorization request that has passed client and scope validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// Client ID.
    pub client_id: String,

    /// Requested response types (space-separated on the wire).
    #[serde(rename = "response_type")]
    pub response_types: ResponseTypeSet,

    /// Redirect URI (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,

    /// Opaque state, echoed back verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Requested scope (space-separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Nonce bound into issued ID tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl AuthorizationRequest {
    /// Creates a request with the mandatory fields set.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        response_types: ResponseTypeSet,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            response_types,
            redirect_uri: Some(redirect_uri.into()),
            state: None,
            scope: None,
            nonce: None,
        }
    }

    /// Sets the state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the nonce.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}
