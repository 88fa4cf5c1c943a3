//! Hybrid OP Conformance Tests
//!
//! Tests for OpenID Connect Hybrid flow certification profile.
//!
//! Reference: https://openid.net/specs/openid-connect-core-1_0.html#HybridFlowAuth

use authz_protocol_oidc::{
    AuthorizationRequest, GrantClassification, Principal, ResponseMode, SecurityContext,
};

use crate::harness::{
    authenticated, redirect, TestHarness, FIXED_ACCESS_TOKEN, FIXED_CODE, FIXED_ID_TOKEN,
};

fn example_request(response_type: &str) -> anyhow::Result<AuthorizationRequest> {
    Ok(AuthorizationRequest::new("clientid", "example.com", response_type.parse()?).with_state("California"))
}

fn example_principal() -> Principal {
    Principal::new("userid", "username").with_email("email")
}

/// hybrid-op-1: code id_token uses the code grant with fragment placement.
#[tokio::test]
async fn test_code_id_token() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("code id_token", &authenticated()).await?;

    assert_eq!(target.mode(), ResponseMode::Fragment);
    assert!(target.get("code").is_some());
    assert!(target.get("id_token").is_some());
    // The access token issued alongside the code is delivered with it.
    assert_eq!(target.get("token_type"), Some("bearer"));
    assert!(target.get("access_token").is_some_and(|t| !t.is_empty()));
    assert!(target.get("expires_in").is_some());
    assert!(!harness.codes.is_empty().await);

    Ok(())
}

/// hybrid-op-2: code token is implicit and exposes the access token.
#[tokio::test]
async fn test_code_token() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let target = harness.authorize("code token", &authenticated()).await?;

    assert_eq!(
        authz_protocol_oidc::classify(&"code token".parse()?)?,
        GrantClassification::Implicit
    );
    assert_eq!(target.mode(), ResponseMode::Fragment);
    assert!(target.get("code").is_some());
    assert!(target.get("access_token").is_some());
    assert!(target.get("id_token").is_none());

    Ok(())
}

/// hybrid-op-3: authenticated code id_token token carries everything plus session_state.
#[tokio::test]
async fn test_code_id_token_token_authenticated() -> anyhow::Result<()> {
    let harness = TestHarness::fixed();
    let context = SecurityContext::authenticated(example_principal(), "SOMESESSIONID");
    let uri = harness
        .engine
        .authorize(&example_request("code token id_token")?, &context)
        .await?
        .to_uri();

    assert!(uri.starts_with("example.com#"));
    assert!(uri.contains("token_type=bearer"));
    assert!(uri.contains("access_token=TOKEN_VALUE%2B%3D"));
    assert!(uri.contains("id_token=idTokenValue"));
    assert!(uri.contains("code=ABCD"));
    assert!(uri.contains("state=California"));
    assert!(uri.contains("expires_in="));
    assert!(uri.contains("scope=null"));
    assert!(uri.contains("session_state="));
    assert!(!uri.contains('?'));

    let (_, _, params) = redirect::split(&uri)?;
    assert_eq!(redirect::param(&params, "access_token"), Some(FIXED_ACCESS_TOKEN));
    assert_eq!(redirect::param(&params, "id_token"), Some(FIXED_ID_TOKEN));
    assert_eq!(redirect::param(&params, "code"), Some(FIXED_CODE));

    Ok(())
}

/// hybrid-op-4: the anonymous variant omits session_state entirely.
#[tokio::test]
async fn test_code_id_token_token_anonymous() -> anyhow::Result<()> {
    let harness = TestHarness::fixed();
    let context = SecurityContext::anonymous(example_principal());
    let uri = harness
        .engine
        .authorize(&example_request("code token id_token")?, &context)
        .await?
        .to_uri();

    assert!(uri.starts_with("example.com#"));
    assert!(uri.contains("access_token=TOKEN_VALUE%2B%3D"));
    assert!(uri.contains("id_token=idTokenValue"));
    assert!(uri.contains("code=ABCD"));
    assert!(uri.contains("state=California"));
    assert!(uri.contains("scope=null"));
    assert!(!uri.contains("session_state"));

    Ok(())
}

/// hybrid-op-5: unrecognized response types ride along without effect.
#[tokio::test]
async fn test_unrecognized_values_are_ignored() -> anyhow::Result<()> {
    let harness = TestHarness::fixed();
    let target = harness
        .engine
        .authorize(&example_request("code id_token none")?, &authenticated())
        .await?;

    assert_eq!(target.mode(), ResponseMode::Fragment);
    assert!(target.get("code").is_some());
    assert_eq!(target.get("access_token"), Some(FIXED_ACCESS_TOKEN));

    Ok(())
}
