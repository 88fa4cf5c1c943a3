//! # authz-cli
//!
//! Command-line front end for the authorization engine.
//!
//! - `classify` - resolve a `response_type` value to its grant and placement
//! - `authorize` - run an authorization against the local issuer
//! - `timestamp` - format instants in the wire timestamp format

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
