//! # Steam Trade Client
//!
//! An async Rust client for Steam trading bots: Web API reads, community
//! actions and Steam Guard codes, with every request throttled through one
//! shared token bucket.
//!
//! ## Features
//!
//! - Steam Guard login codes and mobile confirmation signatures
//! - Token bucket rate limiting shared by all outbound calls
//! - Web API reads: profiles, stats, owned and recently played games
//! - Community actions: login, friends, trade offers, market listings, confirmations
//! - Strong typing for all request/response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use steam_trade_client::rate_limit::{RateLimitConfig, RateLimitedClient};
//! use steam_trade_client::types::SteamId;
//! use steam_trade_client::web::{SteamClient, SteamWebClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SteamWebClient::builder().api_key("API_KEY").build();
//!     let client = RateLimitedClient::new(client, RateLimitConfig::default())?;
//!
//!     let summaries = client
//!         .get_player_summaries(SteamId::new(76561197960435530))
//!         .await?;
//!     println!("{:?}", summaries.response.players);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod types;
pub mod web;

// Re-export commonly used types at crate root
pub use error::SteamError;
pub use types::common::{AppId, ContextId, SteamId};

/// Result type alias using SteamError
pub type Result<T> = std::result::Result<T, SteamError>;
