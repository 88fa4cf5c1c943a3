//! Grant type resolution.
//!
//! Maps a requested `response_type` set onto the grant flow used to satisfy it
//! and onto the part of the redirect URI that carries the response.

use crate::error::{OidcError, OidcResult};
use crate::types::{GrantClassification, ResponseMode, ResponseType, ResponseTypeSet};

/// Classifies a response type set. The first matching rule wins:
///
/// 1. `token` anywhere: the access token travels in the redirect, so the grant
///    is implicit.
/// 2. `id_token` without `code`: pure implicit ID token flow.
/// 3. `code`, with or without `id_token`: the authorization code grant, with
///    any ID token delivered next to the code.
///
/// # Errors
///
/// Returns [`OidcError::InvalidRequest`] when the set holds no recognized
/// response type.
pub fn classify(response_types: &ResponseTypeSet) -> OidcResult<GrantClassification> {
    let has = |t| response_types.contains(t);

    if has(ResponseType::Token) || (has(ResponseType::IdToken) && !has(ResponseType::Code)) {
        Ok(GrantClassification::Implicit)
    } else if has(ResponseType::Code) {
        Ok(GrantClassification::AuthorizationCode)
    } else if response_types.is_empty() {
        Err(OidcError::InvalidRequest("response_type is required".to_string()))
    } else {
        Err(OidcError::InvalidRequest(format!(
            "no supported response_type in '{response_types}'"
        )))
    }
}

/// Chooses the response placement.
///
/// Only the bare `code` request of the RFC 6749 code grant uses the query
/// string; every implicit or multi-valued response goes into the fragment.
#[must_use]
pub fn placement(
    response_types: &ResponseTypeSet,
    classification: GrantClassification,
) -> ResponseMode {
    match classification {
        GrantClassification::AuthorizationCode if response_types.is_code_only() => {
            ResponseMode::Query
        }
        GrantClassification::AuthorizationCode | GrantClassification::Implicit => {
            ResponseMode::Fragment
        }
    }
}
