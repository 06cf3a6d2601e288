//! Rate-limited client wrapper.
//!
//! Wraps any [`SteamClient`] so that every operation, read or write, draws a
//! permit from one shared [`TokenBucket`] before it reaches the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use steam_trade_client::rate_limit::{RateLimitConfig, RateLimitedClient};
//! use steam_trade_client::web::SteamWebClient;
//!
//! let client = SteamWebClient::builder().api_key("API_KEY").build();
//! let limited = RateLimitedClient::new(client, RateLimitConfig::new(1, 5))?;
//!
//! // Requests are automatically rate limited
//! let inventory = limited.get_player_inventory(&request).await?;
//! ```

use crate::auth::Credentials;
use crate::error::SteamError;
use crate::rate_limit::{RateLimitConfig, TokenBucket};
use crate::types::{AppId, SteamId};
use crate::web::SteamClient;
use crate::web::api::{
    InventoryRequest, OwnedGamesResponse, PlayerInventory, PlayerSummariesResponse,
    RecentlyPlayedGamesResponse, UserStatsForGameResponse,
};
use crate::web::community::{
    Confirmation, ConfirmationList, ConfirmationOp, ConfirmationRequest, MarketItem,
    MarketListingResponse, TradeOffer, TradeOfferId,
};

/// A rate-limited wrapper around any [`SteamClient`] implementation.
///
/// Every call waits for a bucket permit, then delegates to the inner client.
/// A call abandoned while waiting consumes nothing.
pub struct RateLimitedClient<C> {
    inner: C,
    config: RateLimitConfig,
    bucket: TokenBucket,
}

impl<C> RateLimitedClient<C> {
    /// Create a new rate-limited client wrapper with its own bucket.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(inner: C, config: RateLimitConfig) -> Result<Self, SteamError> {
        let bucket = TokenBucket::new(&config)?;
        Ok(Self {
            inner,
            config,
            bucket,
        })
    }

    /// Wrap a client around an existing bucket, e.g. one shared by several clients.
    ///
    /// The reported configuration is taken from the bucket.
    pub fn with_bucket(inner: C, bucket: TokenBucket) -> Self {
        Self {
            inner,
            config: bucket.config(),
            bucket,
        }
    }

    /// Get a reference to the inner client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Get the bucket requests are drawn from.
    pub fn bucket(&self) -> &TokenBucket {
        &self.bucket
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    async fn wait(&self) -> Result<(), SteamError> {
        if !self.config.enabled {
            return Ok(());
        }
        self.bucket.acquire().await
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for RateLimitedClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedClient")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .field("available", &self.bucket.available())
            .finish()
    }
}

impl<C: Clone> Clone for RateLimitedClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
            bucket: self.bucket.clone(),
        }
    }
}

// SteamClient Trait Implementation

impl<C: SteamClient> SteamClient for RateLimitedClient<C> {
    // ========== Reads ==========

    async fn get_player_summaries(
        &self,
        steam_id: SteamId,
    ) -> Result<PlayerSummariesResponse, SteamError> {
        self.wait().await?;
        self.inner.get_player_summaries(steam_id).await
    }

    async fn get_player_inventory(
        &self,
        request: &InventoryRequest,
    ) -> Result<PlayerInventory, SteamError> {
        self.wait().await?;
        self.inner.get_player_inventory(request).await
    }

    async fn get_user_stats_for_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<UserStatsForGameResponse, SteamError> {
        self.wait().await?;
        self.inner.get_user_stats_for_game(steam_id, app_id).await
    }

    async fn get_owned_games(&self, steam_id: SteamId) -> Result<OwnedGamesResponse, SteamError> {
        self.wait().await?;
        self.inner.get_owned_games(steam_id).await
    }

    async fn get_recently_played_games(
        &self,
        steam_id: SteamId,
    ) -> Result<RecentlyPlayedGamesResponse, SteamError> {
        self.wait().await?;
        self.inner.get_recently_played_games(steam_id).await
    }

    // ========== Session ==========

    async fn login(&self, credentials: &Credentials) -> Result<(), SteamError> {
        self.wait().await?;
        self.inner.login(credentials).await
    }

    // ========== Friends ==========

    async fn add_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.wait().await?;
        self.inner.add_friend(steam_id).await
    }

    async fn remove_friend(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.wait().await?;
        self.inner.remove_friend(steam_id).await
    }

    async fn accept_friend_request(&self, steam_id: SteamId) -> Result<(), SteamError> {
        self.wait().await?;
        self.inner.accept_friend_request(steam_id).await
    }

    // ========== Trading ==========

    async fn send_trade_offer(&self, offer: &TradeOffer) -> Result<TradeOfferId, SteamError> {
        self.wait().await?;
        self.inner.send_trade_offer(offer).await
    }

    async fn list_market_item(
        &self,
        item: &MarketItem,
    ) -> Result<MarketListingResponse, SteamError> {
        self.wait().await?;
        self.inner.list_market_item(item).await
    }

    // ========== Confirmations ==========

    async fn get_confirmations(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationList, SteamError> {
        self.wait().await?;
        self.inner.get_confirmations(request).await
    }

    async fn respond_to_confirmation(
        &self,
        request: &ConfirmationRequest,
        confirmation: &Confirmation,
        op: ConfirmationOp,
    ) -> Result<(), SteamError> {
        self.wait().await?;
        self.inner
            .respond_to_confirmation(request, confirmation, op)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    /// Counts calls that got past the limiter.
    #[derive(Debug, Clone, Default)]
    struct CountingClient {
        calls: Arc<AtomicUsize>,
    }

    impl CountingClient {
        fn hit(&self) -> Result<(), SteamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl SteamClient for CountingClient {
        async fn get_player_summaries(
            &self,
            _steam_id: SteamId,
        ) -> Result<PlayerSummariesResponse, SteamError> {
            unimplemented!()
        }

        async fn get_player_inventory(
            &self,
            _request: &InventoryRequest,
        ) -> Result<PlayerInventory, SteamError> {
            self.hit()?;
            Ok(PlayerInventory::default())
        }

        async fn get_user_stats_for_game(
            &self,
            _steam_id: SteamId,
            _app_id: AppId,
        ) -> Result<UserStatsForGameResponse, SteamError> {
            unimplemented!()
        }

        async fn get_owned_games(&self, _steam_id: SteamId) -> Result<OwnedGamesResponse, SteamError> {
            unimplemented!()
        }

        async fn get_recently_played_games(
            &self,
            _steam_id: SteamId,
        ) -> Result<RecentlyPlayedGamesResponse, SteamError> {
            unimplemented!()
        }

        async fn login(&self, _credentials: &Credentials) -> Result<(), SteamError> {
            self.hit()
        }

        async fn add_friend(&self, _steam_id: SteamId) -> Result<(), SteamError> {
            self.hit()
        }

        async fn remove_friend(&self, _steam_id: SteamId) -> Result<(), SteamError> {
            self.hit()
        }

        async fn accept_friend_request(&self, _steam_id: SteamId) -> Result<(), SteamError> {
            self.hit()
        }

        async fn send_trade_offer(&self, _offer: &TradeOffer) -> Result<TradeOfferId, SteamError> {
            self.hit()?;
            Ok(TradeOfferId("1".to_string()))
        }

        async fn list_market_item(
            &self,
            _item: &MarketItem,
        ) -> Result<MarketListingResponse, SteamError> {
            self.hit()?;
            Ok(MarketListingResponse::default())
        }

        async fn get_confirmations(
            &self,
            _request: &ConfirmationRequest,
        ) -> Result<ConfirmationList, SteamError> {
            self.hit()?;
            Ok(ConfirmationList::default())
        }

        async fn respond_to_confirmation(
            &self,
            _request: &ConfirmationRequest,
            _confirmation: &Confirmation,
            _op: ConfirmationOp,
        ) -> Result<(), SteamError> {
            self.hit()
        }
    }

    const PARTNER: SteamId = SteamId::new(76561197960435530);

    #[tokio::test(start_paused = true)]
    async fn test_burst_then_steady_rate() {
        let inner = CountingClient::default();
        let client = RateLimitedClient::new(inner.clone(), RateLimitConfig::new(1, 5)).unwrap();

        // Ticks at 1s..5s fill the pool; stop halfway to the next tick.
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(client.bucket().available(), 5);

        let start = Instant::now();
        let burst: Vec<_> = (0..5)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.add_friend(PARTNER).await })
            })
            .collect();
        for call in burst {
            call.await.unwrap().unwrap();
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 5);

        // The sixth call waits for the 6s tick.
        client.add_friend(PARTNER).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500), "{:?}", start.elapsed());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_and_writes_share_the_bucket() {
        let inner = CountingClient::default();
        let client = RateLimitedClient::new(inner.clone(), RateLimitConfig::new(1, 2)).unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;

        let request = InventoryRequest::new(PARTNER, 730, 2);
        client.get_player_inventory(&request).await.unwrap();
        client.send_trade_offer(&TradeOffer::new(PARTNER)).await.unwrap();
        assert_eq!(client.bucket().available(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_skips_bucket() {
        let inner = CountingClient::default();
        let mut client = RateLimitedClient::new(inner.clone(), RateLimitConfig::new(1, 1)).unwrap();
        client.set_enabled(false);

        let start = Instant::now();
        for _ in 0..10 {
            client.remove_friend(PARTNER).await.unwrap();
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_fails_waiting_calls() {
        let inner = CountingClient::default();
        let client = RateLimitedClient::new(inner.clone(), RateLimitConfig::new(1, 5)).unwrap();
        client.bucket().shutdown();

        let err = client.accept_friend_request(PARTNER).await.unwrap_err();
        assert!(matches!(err, SteamError::RateLimiterClosed));
        assert_eq!(inner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_shared_bucket_reports_its_own_limits() {
        let bucket = TokenBucket::new(&RateLimitConfig::new(4, 3)).unwrap();
        let client = RateLimitedClient::with_bucket(CountingClient::default(), bucket.clone());

        assert_eq!(client.config(), &RateLimitConfig::new(4, 3));
        assert_eq!(client.config().refill_interval(), bucket.refill_interval());
    }

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        let result = RateLimitedClient::new(CountingClient::default(), RateLimitConfig::new(0, 5));
        assert!(matches!(result, Err(SteamError::Config(_))));
    }
}
