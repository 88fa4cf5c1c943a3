//! OIDC Conformance Test Suite
//!
//! Drives the authorization engine end to end and checks the redirects it
//! produces against the OpenID Connect certification profiles.
//!
//! ## Test Profiles
//!
//! - Basic OP (Authorization Code flow)
//! - Implicit OP
//! - Hybrid OP
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p oidc-conformance-tests
//! cargo test -p oidc-conformance-tests hybrid_op
//! ```

mod harness;
mod hybrid_op;
mod implicit_op;
