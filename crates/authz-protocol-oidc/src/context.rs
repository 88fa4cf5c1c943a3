//! Caller security context.
//!
//! Built once per request by the authentication layer. An anonymous caller
//! still has a principal, but never a session, so nothing session-derived can
//! leak into its response.

use serde::{Deserialize, Serialize};

/// The user on whose behalf credentials are issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Opaque user identifier.
    pub user_id: String,

    /// Display name.
    pub username: String,

    /// Email address, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Identity provider the user authenticated against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl Principal {
    /// Creates a principal with the mandatory fields set.
    #[must_use]
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: None,
            origin: None,
        }
    }

    /// Sets the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Authentication state of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecurityContext {
    /// A user who really authenticated and holds an SSO session.
    Authenticated {
        /// The user.
        principal: Principal,
        /// Identity provider session identifier.
        session_id: String,
    },

    /// A caller without a real authentication.
    Anonymous {
        /// The placeholder principal.
        principal: Principal,
    },
}

impl SecurityContext {
    /// Creates an authenticated context.
    #[must_use]
    pub fn authenticated(principal: Principal, session_id: impl Into<String>) -> Self {
        Self::Authenticated {
            principal,
            session_id: session_id.into(),
        }
    }

    /// Creates an anonymous context.
    #[must_use]
    pub const fn anonymous(principal: Principal) -> Self {
        Self::Anonymous { principal }
    }

    /// Returns the principal.
    #[must_use]
    pub const fn principal(&self) -> &Principal {
        match self {
            Self::Authenticated { principal, .. } | Self::Anonymous { principal } => principal,
        }
    }

    /// Returns the session id for authenticated callers.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { session_id, .. } => Some(session_id),
            Self::Anonymous { .. } => None,
        }
    }

    /// Whether the caller really authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
