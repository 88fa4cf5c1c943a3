//! Implicit OP Conformance Tests
//!
//! `id_token`, `token` and `id_token token` responses, all delivered in the
//! fragment.
//!
//! Reference: https://openid.net/specs/openid-connect-core-1_0.html#ImplicitFlowAuth

use authz_protocol_oidc::ResponseMode;

use crate::harness::{
    anonymous, authenticated, jwt, redirect, TestHarness, TEST_CLIENT_ID, TEST_SESSION_ID,
    TEST_USER_ID,
};

/// implicit-op-1: id_token response is delivered in the fragment.
#[tokio::test]
async fn test_id_token_response_uses_fragment() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("id_token", &authenticated()).await?;

    assert_eq!(target.mode(), ResponseMode::Fragment);
    let (_, separator, params) = redirect::split(&target.to_uri())?;
    assert_eq!(separator, '#');
    assert!(redirect::param(&params, "id_token").is_some());
    assert!(redirect::param(&params, "code").is_none());
    assert_eq!(redirect::param(&params, "token_type"), Some("bearer"));
    assert!(redirect::param(&params, "access_token").is_some());
    assert_eq!(redirect::param(&params, "state"), Some("test-state-123"));

    Ok(())
}

/// implicit-op-2: the ID token carries the request nonce and session.
#[tokio::test]
async fn test_id_token_claims() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("id_token", &authenticated()).await?;
    let id_token = target.get("id_token").expect("id_token present");

    let header = jwt::decode_header_unverified(id_token)?;
    assert_eq!(header["alg"], "none");

    let claims = jwt::decode_payload_unverified(id_token)?;
    assert_eq!(claims["iss"], "http://localhost:8080/oauth");
    assert_eq!(claims["sub"], TEST_USER_ID);
    assert_eq!(claims["aud"], TEST_CLIENT_ID);
    assert_eq!(claims["nonce"], "test-nonce-456");
    assert_eq!(claims["sid"], TEST_SESSION_ID);

    Ok(())
}

/// implicit-op-3: token response carries the full access token field set.
#[tokio::test]
async fn test_token_response_fields() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("token", &authenticated()).await?;

    assert_eq!(target.mode(), ResponseMode::Fragment);
    assert_eq!(target.get("token_type"), Some("bearer"));
    assert!(target.get("access_token").is_some_and(|t| !t.is_empty()));
    assert_eq!(target.get("scope"), Some("openid profile"));
    assert!(target.get("jti").is_some());

    let expires_in: i64 = target.get("expires_in").expect("expires_in present").parse()?;
    assert!((299..=300).contains(&expires_in));

    Ok(())
}

/// implicit-op-4: parameters are emitted in the fixed order.
#[tokio::test]
async fn test_id_token_token_parameter_order() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("id_token token", &authenticated()).await?;

    let names: Vec<&str> = target.parameters().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        [
            "token_type",
            "access_token",
            "id_token",
            "state",
            "expires_in",
            "scope",
            "jti",
            "session_state",
        ]
    );

    Ok(())
}

/// implicit-op-5: anonymous callers get tokens but no session_state.
#[tokio::test]
async fn test_anonymous_implicit_has_no_session_state() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("id_token token", &anonymous()).await?;

    assert!(target.get("access_token").is_some());
    assert!(target.get("session_state").is_none());

    let claims = jwt::decode_payload_unverified(target.get("id_token").expect("id_token"))?;
    assert!(claims.get("sid").is_none());

    Ok(())
}

/// implicit-op-6: implicit responses never store an authorization code.
#[tokio::test]
async fn test_implicit_stores_no_code() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.authorize("id_token token", &authenticated()).await?;
    assert!(harness.codes.is_empty().await);

    Ok(())
}
