//! Time limits for network operations.
//!
//! Pull and push talk to the remote and may hang on credentials or a dead
//! connection; local git commands run without a limit.

use std::time::Duration;

/// Environment variable overriding the network time limit
pub const TIMEOUT_ENV_VAR: &str = "TAG_RELEASE_TIMEOUT_SECS";

/// Default limit for a single pull or push
pub const DEFAULT_NETWORK_SECS: u64 = 300;

/// Upper bound for any configured limit
pub const MAX_NETWORK_SECS: u64 = 3600;

/// Time limits for steps that reach the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Seconds allowed for each pull or push
    pub network_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            network_secs: DEFAULT_NETWORK_SECS,
        }
    }
}

impl TimeoutConfig {
    /// Explicit limit, typically from `--timeout`
    pub fn with_network_secs(network_secs: u64) -> Self {
        Self { network_secs }
    }

    /// Parse seconds from an environment value, clamped to the maximum
    fn parse_secs(value: Option<String>, default: u64, max: u64) -> u64 {
        value
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .map(|v| v.min(max))
            .unwrap_or(default)
    }

    /// Create config from the environment with fallback to defaults
    pub fn from_env() -> Self {
        Self {
            network_secs: Self::parse_secs(
                std::env::var(TIMEOUT_ENV_VAR).ok(),
                DEFAULT_NETWORK_SECS,
                MAX_NETWORK_SECS,
            ),
        }
    }

    /// Validate the limit is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.network_secs == 0 {
            return Err("network timeout must be at least 1 second".to_string());
        }
        if self.network_secs > MAX_NETWORK_SECS {
            return Err(format!(
                "network timeout too high: {} (max: {})",
                self.network_secs, MAX_NETWORK_SECS
            ));
        }
        Ok(())
    }

    /// Limit as a [`Duration`]
    pub fn network_timeout(&self) -> Duration {
        Duration::from_secs(self.network_secs)
    }
}
