//! `timestamp` command.

use chrono::Utc;

use crate::config::OutputFormat;
use crate::output::success;

/// Formats `millis` (or the current time) in the wire format.
///
/// # Errors
///
/// Returns [`crate::CliError::Core`] if `millis` is out of range.
pub fn format_timestamp(millis: Option<i64>) -> crate::CliResult<String> {
    let instant = match millis {
        Some(ms) => authz_core::timestamp::from_epoch_millis(ms)?,
        None => Utc::now(),
    };
    Ok(authz_core::timestamp::format(&instant))
}

/// Runs the timestamp command.
///
/// # Errors
///
/// See [`format_timestamp`].
pub fn run_timestamp(millis: Option<i64>, format: OutputFormat) -> crate::CliResult<()> {
    let formatted = format_timestamp(millis)?;
    match format {
        OutputFormat::Text => success(&formatted),
        OutputFormat::Json => println!("{}", serde_json::json!({ "timestamp": formatted })),
        OutputFormat::Quiet => println!("{formatted}"),
    }
    Ok(())
}
