//! Configuration for the token service.
//!
//! All settings can be loaded from environment variables and are validated
//! before a service is constructed from them.

use crate::error::TokenError;
use std::env;
use std::time::Duration;

/// Default access token lifetime: 5 minutes.
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_millis(300_000);

/// Default verification clock-skew tolerance: 60 seconds.
pub const DEFAULT_CLOCK_SKEW: Duration = Duration::from_millis(60_000);

/// Token service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret key text; a random 32-byte key is generated when absent.
    pub secret_key: Option<String>,
    /// Default access token lifetime.
    pub access_token_ttl: Duration,
    /// Clock-skew tolerance applied to the expiry check only.
    pub clock_skew: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            secret_key: None,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            clock_skew: DEFAULT_CLOCK_SKEW,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `TOKEN_SECRET_KEY`, `ACCESS_TOKEN_TTL_MS` and `CLOCK_SKEW_MS`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, TokenError> {
        let secret_key = env::var("TOKEN_SECRET_KEY").ok().filter(|s| !s.is_empty());

        let access_token_ttl = match env::var("ACCESS_TOKEN_TTL_MS") {
            Ok(v) => Duration::from_millis(
                v.parse()
                    .map_err(|_| TokenError::config(format!("Invalid ACCESS_TOKEN_TTL_MS: {}", v)))?,
            ),
            Err(_) => DEFAULT_ACCESS_TOKEN_TTL,
        };

        let clock_skew = match env::var("CLOCK_SKEW_MS") {
            Ok(v) => Duration::from_millis(
                v.parse()
                    .map_err(|_| TokenError::config(format!("Invalid CLOCK_SKEW_MS: {}", v)))?,
            ),
            Err(_) => DEFAULT_CLOCK_SKEW,
        };

        let config = Config {
            secret_key,
            access_token_ttl,
            clock_skew,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the secret key text.
    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Set the default access token lifetime.
    #[must_use]
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Set the clock-skew tolerance.
    #[must_use]
    pub fn with_clock_skew(mut self, skew: Duration) -> Self {
        self.clock_skew = skew;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.access_token_ttl.is_zero() {
            return Err(TokenError::config("access_token_ttl must be non-zero"));
        }
        if let Some(ref key) = self.secret_key {
            if key.is_empty() {
                return Err(TokenError::config("secret_key must not be empty when set"));
            }
        }
        Ok(())
    }
}
