//! CLI argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// authz - Authorization grant decision tool.
#[derive(Debug, Parser)]
#[command(name = "authz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a response_type value and show where the response goes.
    Classify {
        /// Space-separated response types, e.g. "code id_token".
        response_type: String,
    },

    /// Run a full authorization with the local issuer and print the redirect.
    Authorize(AuthorizeArgs),

    /// Format a timestamp in the wire format.
    Timestamp {
        /// Milliseconds since the Unix epoch (defaults to now).
        #[arg(long, allow_hyphen_values = true)]
        millis: Option<i64>,
    },
}

/// Arguments for `authorize`.
#[derive(Debug, Args)]
pub struct AuthorizeArgs {
    /// Client ID.
    #[arg(long)]
    pub client_id: String,

    /// Redirect URI.
    #[arg(long)]
    pub redirect_uri: String,

    /// Space-separated response types.
    #[arg(long)]
    pub response_type: String,

    /// Opaque state echoed back to the client.
    #[arg(long)]
    pub state: Option<String>,

    /// Requested scope.
    #[arg(long)]
    pub scope: Option<String>,

    /// Nonce bound into the ID token.
    #[arg(long)]
    pub nonce: Option<String>,

    /// Subject user ID.
    #[arg(long, default_value = "user")]
    pub user_id: String,

    /// Subject username.
    #[arg(long, default_value = "user")]
    pub username: String,

    /// Subject email.
    #[arg(long)]
    pub email: Option<String>,

    /// SSO session ID (a random one is generated when omitted).
    #[arg(long, conflicts_with = "anonymous")]
    pub session_id: Option<String>,

    /// Authorize as an anonymous caller without a session.
    #[arg(long)]
    pub anonymous: bool,
}
