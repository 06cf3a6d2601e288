//! Demo bot: logs in and runs the read calls against one profile.
//!
//! Reads secrets from `.env` and limits from `config.yaml` in the working
//! directory. Set `STEAM_SESSION_ID` to also send a friend request.
//!
//! Run with: cargo run --bin steam-bot

use std::process::ExitCode;

use steam_trade_client::auth::EnvCredentials;
use steam_trade_client::config::{BotConfig, load_env_file};
use steam_trade_client::rate_limit::RateLimitedClient;
use steam_trade_client::types::SteamId;
use steam_trade_client::web::api::InventoryRequest;
use steam_trade_client::web::{SteamClient, SteamWebClient};
use steam_trade_client::{Result, SteamError};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_FILE: &str = ".env";
const CONFIG_FILE: &str = "config.yaml";
const ENV_SESSION_ID: &str = "STEAM_SESSION_ID";

const TARGET: SteamId = SteamId::new(76561197960435530);
const CS2_APP_ID: u32 = 730;
const CS2_CONTEXT_ID: u64 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Override with RUST_LOG=debug
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    fmt().with_env_filter(env_filter).with_target(false).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "steam bot failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    load_env_file(ENV_FILE)?;
    let config = BotConfig::load(CONFIG_FILE)?;
    let env = EnvCredentials::from_env()?;

    let mut builder = SteamWebClient::builder().api_key_secret(env.api_key);
    if let Some(guard) = env.guard {
        builder = builder.guard(guard);
    }
    let session_id = std::env::var(ENV_SESSION_ID).ok().filter(|s| !s.is_empty());
    if let Some(session_id) = &session_id {
        builder = builder.session_id(session_id.clone());
    }
    let client = RateLimitedClient::new(builder.build(), config.rate_limit)?;

    let credentials = env.credentials.ok_or_else(|| {
        SteamError::LoginFailed("STEAM_USERNAME and STEAM_PASSWORD must be set".to_string())
    })?;
    client.login(&credentials).await?;

    let summaries = client.get_player_summaries(TARGET).await?;
    tracing::info!(?summaries, "player summaries");

    if session_id.is_some() {
        client.add_friend(TARGET).await?;
    } else {
        tracing::warn!("{ENV_SESSION_ID} not set, skipping friend request");
    }

    let inventory = client
        .get_player_inventory(&InventoryRequest::new(TARGET, CS2_APP_ID, CS2_CONTEXT_ID))
        .await?;
    tracing::info!(
        assets = inventory.assets.len(),
        descriptions = inventory.descriptions.len(),
        "player inventory"
    );

    let stats = client.get_user_stats_for_game(TARGET, CS2_APP_ID).await?;
    tracing::info!(?stats, "user stats for game");

    let owned = client.get_owned_games(TARGET).await?;
    tracing::info!(game_count = owned.response.game_count, "owned games");

    let recent = client.get_recently_played_games(TARGET).await?;
    tracing::info!(total_count = recent.response.total_count, "recently played games");

    client.bucket().shutdown();
    Ok(())
}
