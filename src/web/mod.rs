//! Steam Web API and Steam Community client.
//!
//! Reads (profiles, stats, owned games, inventories) go through
//! [`api`]; session actions (login, friends, trade offers, market listings,
//! mobile confirmations) go through [`community`].
//!
//! # Trait-based API
//!
//! The [`SteamClient`] trait abstracts every operation so the client can be
//! mocked in tests or wrapped in the [`RateLimitedClient`](crate::rate_limit::RateLimitedClient).
//!
//! ```rust,ignore
//! use steam_trade_client::web::{SteamClient, SteamWebClient};
//! use steam_trade_client::types::SteamId;
//!
//! async fn owned<C: SteamClient>(client: &C) -> steam_trade_client::Result<u32> {
//!     let games = client.get_owned_games(SteamId::new(76561197960435530)).await?;
//!     Ok(games.response.game_count)
//! }
//! ```

mod client;
mod endpoints;
pub mod api;
pub mod community;
mod traits;

pub use client::{SteamWebClient, SteamWebClientBuilder};
pub use endpoints::{INVENTORY_PAGE_SIZE, STEAM_API_BASE_URL, STEAM_COMMUNITY_BASE_URL};
pub use traits::SteamClient;
