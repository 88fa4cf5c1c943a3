//! # authz-protocol-oidc
//!
//! OAuth 2.0 / `OpenID` Connect authorization response engine.
//!
//! Decides which grant flow a `response_type` set maps to, drives credential
//! issuance through an injected issuer, and assembles the redirect that carries
//! the result back to the client.
//!
//! ## Modules
//!
//! - [`authorization`] - End-to-end authorization decision flow
//! - [`claims`] - ID token claims
//! - [`code_store`] - Authorization code persistence
//! - [`context`] - Authenticated and anonymous caller contexts
//! - [`error`] - OIDC error types following RFC 6749
//! - [`issuer`] - The credential issuance boundary
//! - [`local_issuer`] - Self-contained issuer for tooling and tests
//! - [`redirect`] - Redirect URI validation and response assembly
//! - [`request`] - Authorization request type
//! - [`resolver`] - Grant classification and response placement
//! - [`session_state`] - Session Management `session_state` values
//! - [`types`] - Response types, grant classes and parameter names

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod authorization;
pub mod claims;
pub mod code_store;
pub mod context;
pub mod error;
pub mod issuer;
pub mod local_issuer;
pub mod redirect;
pub mod request;
pub mod resolver;
pub mod session_state;
pub mod types;

// Re-export commonly used types
pub use authorization::AuthorizationEngine;
pub use claims::IdTokenClaims;
pub use code_store::{AuthCodeParams, AuthCodeStore, InMemoryAuthCodeStore, StoredAuthCode};
pub use context::{Principal, SecurityContext};
pub use error::{ErrorResponse, IssuanceError, OidcError, OidcResult};
pub use issuer::{AccessTokenRecord, CredentialIssuer, IssuedCredentialBundle};
pub use local_issuer::LocalCredentialIssuer;
pub use redirect::{validate_redirect_uri, RedirectResponseBuilder, RedirectTarget};
pub use request::AuthorizationRequest;
pub use resolver::{classify, placement};
pub use session_state::{redirect_origin, SessionStateCalculator};
pub use types::{GrantClassification, ResponseMode, ResponseType, ResponseTypeSet, TokenType};
