use std::time::{Duration, Instant};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use steam_trade_client::SteamError;
use steam_trade_client::rate_limit::{RateLimitConfig, RateLimitedClient, TokenBucket};
use steam_trade_client::types::SteamId;
use steam_trade_client::web::{SteamClient, SteamWebClient};

const PLAYER: SteamId = SteamId::new(76561197960435530);

async fn owned_games_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetOwnedGames/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"game_count": 0, "games": []}
        })))
        .mount(&server)
        .await;
    server
}

fn web_client(server: &MockServer) -> SteamWebClient {
    SteamWebClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .max_retries(0)
        .build()
}

#[tokio::test]
async fn test_requests_wait_for_permits() {
    let server = owned_games_server().await;
    let client = RateLimitedClient::new(web_client(&server), RateLimitConfig::new(20, 2)).unwrap();

    // Cold start: each call waits for its own refill tick.
    let start = Instant::now();
    for _ in 0..3 {
        client.get_owned_games(PLAYER).await.unwrap();
    }
    assert!(start.elapsed() >= Duration::from_millis(140), "{:?}", start.elapsed());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_clients_share_one_bucket() {
    let server = owned_games_server().await;
    let config = RateLimitConfig::new(20, 1);
    let bucket = TokenBucket::new(&config).unwrap();

    let first = RateLimitedClient::with_bucket(web_client(&server), bucket.clone());
    let second = RateLimitedClient::with_bucket(web_client(&server), bucket.clone());
    assert_eq!(first.config(), &config);

    let start = Instant::now();
    first.get_owned_games(PLAYER).await.unwrap();
    second.get_owned_games(PLAYER).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(90), "{:?}", start.elapsed());
}

#[tokio::test]
async fn test_shutdown_stops_outbound_calls() {
    let server = owned_games_server().await;
    let client = RateLimitedClient::new(web_client(&server), RateLimitConfig::new(20, 5)).unwrap();
    client.bucket().shutdown();

    let err = client.get_owned_games(PLAYER).await.unwrap_err();
    assert!(matches!(err, SteamError::RateLimiterClosed));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_abandoned_wait_sends_nothing() {
    let server = owned_games_server().await;
    let client = RateLimitedClient::new(web_client(&server), RateLimitConfig::new(1, 1)).unwrap();

    let result = tokio::time::timeout(Duration::from_millis(50), client.get_owned_games(PLAYER)).await;
    assert!(result.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}
