//! Rate limiting for outbound Steam requests.
//!
//! Steam throttles bot accounts aggressively, and community endpoints answer
//! bursts with temporary bans rather than `429` responses. Every outbound call
//! therefore draws a permit from one shared [`TokenBucket`] before it is sent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use steam_trade_client::rate_limit::{RateLimitConfig, RateLimitedClient};
//! use steam_trade_client::types::SteamId;
//! use steam_trade_client::web::{SteamClient, SteamWebClient};
//!
//! # async fn run() -> Result<(), steam_trade_client::SteamError> {
//! let client = SteamWebClient::builder().api_key("API_KEY").build();
//! let limited = RateLimitedClient::new(client, RateLimitConfig::default())?;
//!
//! // Every request waits for a permit first
//! let games = limited.get_owned_games(SteamId::new(76561197960435530)).await?;
//! # Ok(())
//! # }
//! ```

mod bucket;
mod client;

pub use bucket::TokenBucket;
pub use client::RateLimitedClient;

use std::time::Duration;

use serde::Deserialize;

use crate::error::SteamError;

/// Rate limiter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Steady-state permits added per second.
    pub requests_per_second: u32,
    /// Maximum permits held at once.
    pub burst: u32,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: defaults::REQUESTS_PER_SECOND,
            burst: defaults::BURST,
            enabled: true,
        }
    }
}

impl RateLimitConfig {
    /// Create an enabled configuration.
    pub fn new(requests_per_second: u32, burst: u32) -> Self {
        Self {
            requests_per_second,
            burst,
            enabled: true,
        }
    }

    /// Check the construction-time preconditions.
    pub fn validate(&self) -> Result<(), SteamError> {
        if self.requests_per_second == 0 {
            return Err(SteamError::Config(
                "rate_limit.requests_per_second must be greater than zero".to_string(),
            ));
        }
        if self.burst == 0 {
            return Err(SteamError::Config(
                "rate_limit.burst must be at least one".to_string(),
            ));
        }
        if self.refill_interval().is_zero() {
            return Err(SteamError::Config(format!(
                "rate_limit.requests_per_second {} is too high; the refill interval must be at least 1ns",
                self.requests_per_second
            )));
        }
        Ok(())
    }

    /// Time between permit additions.
    ///
    /// Only meaningful for a validated configuration.
    pub fn refill_interval(&self) -> Duration {
        Duration::from_secs(1) / self.requests_per_second.max(1)
    }
}

/// Default limits for a single bot account.
pub mod defaults {
    /// Requests per second.
    pub const REQUESTS_PER_SECOND: u32 = 1;
    /// Burst size.
    pub const BURST: u32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.requests_per_second, 1);
        assert_eq!(config.burst, 5);
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_refill_interval() {
        assert_eq!(
            RateLimitConfig::new(1, 5).refill_interval(),
            Duration::from_secs(1)
        );
        assert_eq!(
            RateLimitConfig::new(4, 5).refill_interval(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(RateLimitConfig::new(0, 5).validate().is_err());
        assert!(RateLimitConfig::new(1, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_sub_nanosecond_interval() {
        let err = RateLimitConfig::new(2_000_000_000, 1).validate().unwrap_err();
        assert!(err.is_config());
        assert!(RateLimitConfig::new(1_000_000_000, 1).validate().is_ok());
    }
}
