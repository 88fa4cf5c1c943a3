//! Engine configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest accepted lifespan for any issued credential (ten years).
pub const MAX_LIFESPAN_SECONDS: i64 = 315_360_000;

/// Authorization engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Issuer identifier placed in issued ID tokens.
    pub issuer: String,

    /// Access token lifespan in seconds.
    pub access_token_lifespan: i64,

    /// ID token lifespan in seconds.
    pub id_token_lifespan: i64,

    /// Authorization code lifespan in seconds.
    pub auth_code_lifespan: i64,

    /// Number of random bytes in the session state salt.
    pub session_salt_bytes: usize,

    /// Log level.
    pub log_level: String,
}

impl EngineConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is present but unparseable, or
    /// if the resulting configuration fails [`EngineConfig::validate`].
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let issuer = std::env::var("AUTHZ_ISSUER").unwrap_or(defaults.issuer);
        let access_token_lifespan =
            parse_var("AUTHZ_ACCESS_TOKEN_LIFESPAN", defaults.access_token_lifespan)?;
        let id_token_lifespan = parse_var("AUTHZ_ID_TOKEN_LIFESPAN", defaults.id_token_lifespan)?;
        let auth_code_lifespan =
            parse_var("AUTHZ_AUTH_CODE_LIFESPAN", defaults.auth_code_lifespan)?;
        let session_salt_bytes =
            parse_var("AUTHZ_SESSION_SALT_BYTES", defaults.session_salt_bytes)?;
        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let config = Self {
            issuer,
            access_token_lifespan,
            id_token_lifespan,
            auth_code_lifespan,
            session_salt_bytes,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            issuer: "http://localhost:8080/oauth".to_string(),
            access_token_lifespan: 300,
            id_token_lifespan: 300,
            auth_code_lifespan: 60,
            session_salt_bytes: 16,
            log_level: "debug".to_string(),
        }
    }

    /// Checks that lifespans are positive and at most [`MAX_LIFESPAN_SECONDS`],
    /// and that the salt is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.issuer.trim().is_empty() {
            return Err(Error::Config("issuer must not be empty".to_string()));
        }
        for (name, value) in [
            ("access_token_lifespan", self.access_token_lifespan),
            ("id_token_lifespan", self.id_token_lifespan),
            ("auth_code_lifespan", self.auth_code_lifespan),
        ] {
            if value <= 0 {
                return Err(Error::Config(format!("{name} must be positive, got {value}")));
            }
            if value > MAX_LIFESPAN_SECONDS {
                return Err(Error::Config(format!(
                    "{name} must be at most {MAX_LIFESPAN_SECONDS}, got {value}"
                )));
            }
        }
        if self.session_salt_bytes == 0 {
            return Err(Error::Config(
                "session_salt_bytes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            issuer: "http://localhost:8080/oauth".to_string(),
            access_token_lifespan: 43_200, // 12 hours
            id_token_lifespan: 43_200,
            auth_code_lifespan: 300, // 5 minutes
            session_salt_bytes: 32,
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}
