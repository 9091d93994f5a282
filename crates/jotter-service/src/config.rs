//! Service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::ratelimit::RateLimitPolicy;

/// Service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Token-bucket policy applied per operation.
    pub rate_limit: RateLimitPolicy,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `JOTTER_RATE_LIMIT_CAPACITY`: bucket capacity (default: 10)
    /// - `JOTTER_RATE_LIMIT_REFILL`: tokens per refill interval (default: 10)
    /// - `JOTTER_RATE_LIMIT_PERIOD_SECS`: refill interval in seconds
    ///   (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = RateLimitPolicy::default();

        let capacity = read_u32("JOTTER_RATE_LIMIT_CAPACITY", defaults.capacity)?;
        let refill_tokens = read_u32("JOTTER_RATE_LIMIT_REFILL", defaults.refill_tokens)?;
        let period_secs = read_u64(
            "JOTTER_RATE_LIMIT_PERIOD_SECS",
            defaults.period.as_secs(),
        )?;

        Ok(Self {
            rate_limit: RateLimitPolicy {
                capacity,
                refill_tokens,
                period: Duration::from_secs(period_secs),
            },
        })
    }
}

fn read_u32(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name,
            reason: format!("expected an unsigned integer, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}

fn read_u64(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name,
            reason: format!("expected an unsigned integer, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue {
        /// The variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Defaults, overrides, and validation share one test so the env
    // mutations cannot race across test threads.
    #[test]
    fn test_from_env() {
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.rate_limit.capacity, 10);
        assert_eq!(config.rate_limit.refill_tokens, 10);
        assert_eq!(config.rate_limit.period, Duration::from_secs(60));

        // SAFETY: No other test reads or writes these variables.
        unsafe { env::set_var("JOTTER_RATE_LIMIT_PERIOD_SECS", "5") };
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.rate_limit.period, Duration::from_secs(5));

        // SAFETY: See above.
        unsafe { env::set_var("JOTTER_RATE_LIMIT_CAPACITY", "not-a-number") };
        let err = ServiceConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("JOTTER_RATE_LIMIT_CAPACITY"));

        // SAFETY: See above.
        unsafe {
            env::remove_var("JOTTER_RATE_LIMIT_PERIOD_SECS");
            env::remove_var("JOTTER_RATE_LIMIT_CAPACITY");
        }
    }
}
