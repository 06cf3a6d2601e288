//! Trait definition for the Steam web client.
//!
//! [`SteamClient`] abstracts every read and write operation so callers can
//! swap in mocks or wrap the client in decorators such as
//! [`RateLimitedClient`](crate::rate_limit::RateLimitedClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use steam_trade_client::web::SteamClient;
//! use steam_trade_client::types::SteamId;
//!
//! async fn print_name<C: SteamClient>(client: &C, id: SteamId) -> steam_trade_client::Result<()> {
//!     let summaries = client.get_player_summaries(id).await?;
//!     for player in summaries.response.players {
//!         println!("{}", player.personaname);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::auth::Credentials;
use crate::error::SteamError;
use crate::types::{AppId, SteamId};
use crate::web::SteamWebClient;
use crate::web::api::{
    InventoryRequest, OwnedGamesResponse, PlayerInventory, PlayerSummariesResponse,
    RecentlyPlayedGamesResponse, UserStatsForGameResponse,
};
use crate::web::community::{
    Confirmation, ConfirmationList, ConfirmationOp, ConfirmationRequest, MarketItem,
    MarketListingResponse, TradeOffer, TradeOfferId,
};

/// All Steam operations the bot performs.
///
/// All methods are async and return `Result<T, SteamError>`.
pub trait SteamClient: Send + Sync {
    // ========== Reads ==========

    /// Get profile summaries for a player.
    fn get_player_summaries(
        &self,
        steam_id: SteamId,
    ) -> impl Future<Output = Result<PlayerSummariesResponse, SteamError>> + Send;

    /// Get a player's inventory for one game and context.
    fn get_player_inventory(
        &self,
        request: &InventoryRequest,
    ) -> impl Future<Output = Result<PlayerInventory, SteamError>> + Send;

    /// Get a player's stats and achievements for a game.
    fn get_user_stats_for_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> impl Future<Output = Result<UserStatsForGameResponse, SteamError>> + Send;

    /// Get the games a player owns.
    fn get_owned_games(
        &self,
        steam_id: SteamId,
    ) -> impl Future<Output = Result<OwnedGamesResponse, SteamError>> + Send;

    /// Get the games a player played recently.
    fn get_recently_played_games(
        &self,
        steam_id: SteamId,
    ) -> impl Future<Output = Result<RecentlyPlayedGamesResponse, SteamError>> + Send;

    // ========== Session ==========

    /// Log in with a password and, when configured, a Steam Guard code.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), SteamError>> + Send;

    // ========== Friends ==========

    /// Send a friend request.
    fn add_friend(&self, steam_id: SteamId) -> impl Future<Output = Result<(), SteamError>> + Send;

    /// Remove a friend.
    fn remove_friend(
        &self,
        steam_id: SteamId,
    ) -> impl Future<Output = Result<(), SteamError>> + Send;

    /// Accept a pending friend request.
    fn accept_friend_request(
        &self,
        steam_id: SteamId,
    ) -> impl Future<Output = Result<(), SteamError>> + Send;

    // ========== Trading ==========

    /// Send a trade offer.
    fn send_trade_offer(
        &self,
        offer: &TradeOffer,
    ) -> impl Future<Output = Result<TradeOfferId, SteamError>> + Send;

    /// List an item on the community market.
    fn list_market_item(
        &self,
        item: &MarketItem,
    ) -> impl Future<Output = Result<MarketListingResponse, SteamError>> + Send;

    // ========== Confirmations ==========

    /// List pending mobile confirmations.
    fn get_confirmations(
        &self,
        request: &ConfirmationRequest,
    ) -> impl Future<Output = Result<ConfirmationList, SteamError>> + Send;

    /// Accept or cancel a pending mobile confirmation.
    fn respond_to_confirmation(
        &self,
        request: &ConfirmationRequest,
        confirmation: &Confirmation,
        op: ConfirmationOp,
    ) -> impl Future<Output = Result<(), SteamError>> + Send;
}

impl SteamClient for SteamWebClient {
    async fn get_player_summaries(
        &self,
        steam_id: SteamId,
    ) -> Result<PlayerSummariesResponse, SteamError> {
        SteamWebClient::get_player_summaries(self, steam_id).await
    }

    async fn get_player_inventory(
        &self,
        request: &InventoryRequest,
    ) -> Result<PlayerInventory, SteamError> {
        SteamWebClient::get_player_inventory(self, request).await
    }

    async fn get_user_stats_for_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<UserStatsForGameResponse, SteamError> {
        SteamWebClient::get_user_stats_for_game(self, steam_id, app_id).await
    }

    async fn get_owned_games(&self, steam_id: SteamId) -> Result<OwnedGamesResponse, SteamError> {
        SteamWebClient::get_owned_games(self, steam_id).await
    }

    async fn get_recently_played_games(
        &self,
        steam_id: SteamId,
    ) -> Result<RecentlyPlayedGamesResponse, SteamError> {
        SteamWebClient::get_recently_played_games(self, steam_id).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), SteamError> {
        SteamWebClient::login(self, credentials).await
    }

    async fn add_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        SteamWebClient::add_friend(self, steam_id).await
    }

    async fn remove_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        SteamWebClient::remove_friend(self, steam_id).await
    }

    async fn accept_friend_request(&self, steam_id: SteamId) -> Result<(), SteamError> {
        SteamWebClient::accept_friend_request(self, steam_id).await
    }

    async fn send_trade_offer(&self, offer: &TradeOffer) -> Result<TradeOfferId, SteamError> {
        SteamWebClient::send_trade_offer(self, offer).await
    }

    async fn list_market_item(
        &self,
        item: &MarketItem,
    ) -> Result<MarketListingResponse, SteamError> {
        SteamWebClient::list_market_item(self, item).await
    }

    async fn get_confirmations(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationList, SteamError> {
        SteamWebClient::get_confirmations(self, request).await
    }

    async fn respond_to_confirmation(
        &self,
        request: &ConfirmationRequest,
        confirmation: &Confirmation,
        op: ConfirmationOp,
    ) -> Result<(), SteamError> {
        SteamWebClient::respond_to_confirmation(self, request, confirmation, op).await
    }
}
