use steam_trade_client::auth::EnvCredentials;
use steam_trade_client::rate_limit::{RateLimitConfig, RateLimitedClient};
use steam_trade_client::types::SteamId;
use steam_trade_client::web::{SteamClient, SteamWebClient};

const PLAYER: SteamId = SteamId::new(76561197960435530);

fn live_tests_enabled() -> bool {
    std::env::var("STEAM_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_web_api_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let env = match EnvCredentials::try_from_env() {
        Some(env) => env,
        None => return Ok(()),
    };
    let client = SteamWebClient::builder().api_key_secret(env.api_key).build();
    let client = RateLimitedClient::new(client, RateLimitConfig::default())?;

    let summaries = client.get_player_summaries(PLAYER).await?;
    assert_eq!(summaries.response.players.len(), 1);

    let owned = client.get_owned_games(PLAYER).await?;
    assert_eq!(owned.response.game_count as usize, owned.response.games.len());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_guard_code_shape() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let guard = match EnvCredentials::try_from_env().and_then(|env| env.guard) {
        Some(guard) => guard,
        None => return Ok(()),
    };
    let code = guard.login_code()?;
    assert_eq!(code.len(), 5);

    Ok(())
}
