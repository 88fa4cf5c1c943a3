//! `classify` command.

use authz_protocol_oidc::{classify, placement, GrantClassification, ResponseMode, ResponseTypeSet};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::output::{info, output_single};

/// Result of classifying a `response_type` value.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    /// Normalized response types.
    pub response_type: String,
    /// Grant the request resolves to.
    pub grant: GrantClassification,
    /// Where the response parameters go.
    pub placement: ResponseMode,
    /// Values that were ignored.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
}

/// Classifies a raw `response_type` value.
///
/// # Errors
///
/// Returns [`crate::CliError::Oidc`] if no recognized response type is present.
pub fn classify_report(raw: &str) -> crate::CliResult<ClassifyReport> {
    let types: ResponseTypeSet = raw.split_whitespace().collect();
    let grant = classify(&types)?;
    Ok(ClassifyReport {
        response_type: types.to_string(),
        grant,
        placement: placement(&types, grant),
        ignored: types.unrecognized().map(str::to_string).collect(),
    })
}

/// Runs the classify command.
///
/// # Errors
///
/// See [`classify_report`].
pub fn run_classify(raw: &str, format: OutputFormat) -> crate::CliResult<()> {
    let report = classify_report(raw)?;
    if !report.ignored.is_empty() && format == OutputFormat::Text {
        info(&format!("ignoring unrecognized values: {}", report.ignored.join(", ")));
    }
    let headline = format!("{} via {}", report.grant, report.placement);
    output_single(&report, &headline, format)
}
