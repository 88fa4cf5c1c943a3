//! `authorize` command.

use std::sync::Arc;

use authz_protocol_oidc::{
    classify, AuthorizationEngine, AuthorizationRequest, InMemoryAuthCodeStore,
    LocalCredentialIssuer, Principal, ResponseMode, ResponseTypeSet, SecurityContext,
    SessionStateCalculator,
};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::AuthorizeArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::output::output_single;

/// Outcome of an authorization run.
#[derive(Debug, Serialize)]
pub struct AuthorizeReport {
    /// The complete redirect URI.
    pub redirect: String,
    /// Grant the request resolved to.
    pub grant: String,
    /// Where the parameters were placed.
    pub placement: ResponseMode,
    /// Raw (unencoded) response parameters, in emission order.
    pub parameters: Vec<(String, String)>,
}

/// Builds the request and caller context described by `args`.
#[must_use]
pub fn request_from_args(args: &AuthorizeArgs) -> (AuthorizationRequest, SecurityContext) {
    let response_types: ResponseTypeSet = args.response_type.split_whitespace().collect();
    let mut request =
        AuthorizationRequest::new(&args.client_id, &args.redirect_uri, response_types);
    request.state.clone_from(&args.state);
    request.scope.clone_from(&args.scope);
    request.nonce.clone_from(&args.nonce);

    let mut principal = Principal::new(&args.user_id, &args.username);
    principal.email.clone_from(&args.email);

    let context = if args.anonymous {
        SecurityContext::anonymous(principal)
    } else {
        let session_id = args
            .session_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        SecurityContext::authenticated(principal, session_id)
    };
    (request, context)
}

/// Runs a full authorization with the local issuer.
///
/// # Errors
///
/// Returns [`crate::CliError::Oidc`] if the request is invalid or issuance fails.
pub async fn authorize(args: &AuthorizeArgs, config: &CliConfig) -> crate::CliResult<AuthorizeReport> {
    let (request, context) = request_from_args(args);
    let grant = classify(&request.response_types)?;

    let issuer = LocalCredentialIssuer::new(
        config.engine.clone(),
        Arc::new(InMemoryAuthCodeStore::new()),
    );
    let engine = AuthorizationEngine::new(Arc::new(issuer))
        .with_session_state(SessionStateCalculator::new(config.engine.session_salt_bytes));

    let target = engine.authorize(&request, &context).await?;
    Ok(AuthorizeReport {
        redirect: target.to_uri(),
        grant: grant.to_string(),
        placement: target.mode(),
        parameters: target.parameters().to_vec(),
    })
}

/// Runs the authorize command.
///
/// # Errors
///
/// See [`authorize`].
pub async fn run_authorize(
    args: &AuthorizeArgs,
    config: &CliConfig,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let report = authorize(args, config).await?;
    output_single(&report, &report.redirect, format)
}
