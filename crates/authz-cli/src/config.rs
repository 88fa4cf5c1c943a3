//! CLI configuration.

use authz_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Engine settings.
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Loads configuration from the environment (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns [`crate::CliError::Core`] if a variable is malformed.
    pub fn load() -> crate::CliResult<Self> {
        Ok(Self {
            engine: EngineConfig::from_env()?,
        })
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// Quiet (bare value only).
    Quiet,
}
