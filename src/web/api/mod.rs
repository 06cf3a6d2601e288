//! Read-only endpoints: Web API profile data and community inventories.

mod types;

pub use types::*;

use crate::error::SteamError;
use crate::types::{AppId, SteamId};
use crate::web::SteamWebClient;
use crate::web::endpoints::{INVENTORY_PAGE_SIZE, api, community};

impl SteamWebClient {
    /// Get profile summaries for a player.
    ///
    /// Requires an API key.
    pub async fn get_player_summaries(
        &self,
        steam_id: SteamId,
    ) -> Result<PlayerSummariesResponse, SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            steamids: SteamId,
        }
        self.api_get(api::PLAYER_SUMMARIES, &Params { steamids: steam_id })
            .await
    }

    /// Get a player's inventory for one game and context.
    ///
    /// Reads the public community inventory; no API key needed.
    pub async fn get_player_inventory(
        &self,
        request: &InventoryRequest,
    ) -> Result<PlayerInventory, SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            l: &'static str,
            count: u32,
        }
        let path = format!(
            "{}/{}/{}/{}",
            community::INVENTORY,
            request.steam_id,
            request.app_id,
            request.context_id
        );
        self.community_get(
            &path,
            &Params {
                l: "english",
                count: INVENTORY_PAGE_SIZE,
            },
        )
        .await
    }

    /// Get a player's stats and achievements for a game.
    ///
    /// Requires an API key.
    pub async fn get_user_stats_for_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<UserStatsForGameResponse, SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            steamid: SteamId,
            appid: AppId,
        }
        self.api_get(
            api::USER_STATS_FOR_GAME,
            &Params {
                steamid: steam_id,
                appid: app_id,
            },
        )
        .await
    }

    /// Get the games a player owns, including names and free games.
    ///
    /// Requires an API key.
    pub async fn get_owned_games(&self, steam_id: SteamId) -> Result<OwnedGamesResponse, SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            steamid: SteamId,
            include_appinfo: bool,
            include_played_free_games: bool,
        }
        self.api_get(
            api::OWNED_GAMES,
            &Params {
                steamid: steam_id,
                include_appinfo: true,
                include_played_free_games: true,
            },
        )
        .await
    }

    /// Get the games a player played in the last two weeks.
    ///
    /// Requires an API key.
    pub async fn get_recently_played_games(
        &self,
        steam_id: SteamId,
    ) -> Result<RecentlyPlayedGamesResponse, SteamError> {
        #[derive(serde::Serialize)]
        struct Params {
            steamid: SteamId,
        }
        self.api_get(api::RECENTLY_PLAYED_GAMES, &Params { steamid: steam_id })
            .await
    }
}
