//! Types for Web API and inventory reads.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::types::serde_helpers::{empty_string_as_none, int_bool, string_or_number};
use crate::types::{AppId, ContextId, SteamId};

/// `GetPlayerSummaries` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummariesResponse {
    /// Response envelope.
    pub response: PlayerSummaries,
}

/// List of player summaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSummaries {
    /// One entry per requested id that exists.
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// Public profile summary.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    /// SteamID64.
    pub steamid: SteamId,
    /// Display name.
    pub personaname: String,
    /// Profile URL.
    pub profileurl: String,
    /// 32x32 avatar URL.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub avatar: Option<String>,
    /// 64x64 avatar URL.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub avatarmedium: Option<String>,
    /// 184x184 avatar URL.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub avatarfull: Option<String>,
}

/// Query for an inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRequest {
    /// Inventory owner.
    pub steam_id: SteamId,
    /// Game the items belong to.
    pub app_id: AppId,
    /// Inventory context.
    pub context_id: ContextId,
}

impl InventoryRequest {
    /// Create a new inventory request.
    pub fn new(steam_id: SteamId, app_id: AppId, context_id: ContextId) -> Self {
        Self {
            steam_id,
            app_id,
            context_id,
        }
    }
}

/// Community inventory listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInventory {
    /// Item instances.
    #[serde(default)]
    pub assets: Vec<InventoryAsset>,
    /// Item class descriptions.
    #[serde(default)]
    pub descriptions: Vec<InventoryDescription>,
    /// Total items in the inventory.
    #[serde(default)]
    pub total_inventory_count: Option<u64>,
}

impl PlayerInventory {
    /// Find the description of an asset by class and instance.
    pub fn description_for(&self, asset: &InventoryAsset) -> Option<&InventoryDescription> {
        self.descriptions
            .iter()
            .find(|d| d.classid == asset.classid && d.instanceid == asset.instanceid)
    }
}

/// One item instance in an inventory.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAsset {
    /// Game id.
    pub appid: AppId,
    /// Inventory context.
    #[serde(with = "string_or_number")]
    pub contextid: ContextId,
    /// Unique asset id.
    #[serde(with = "string_or_number")]
    pub assetid: u64,
    /// Item class.
    pub classid: String,
    /// Item instance.
    pub instanceid: String,
    /// Stack size.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u32,
}

/// Display data shared by items of one class.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryDescription {
    /// Game id.
    pub appid: AppId,
    /// Item class.
    pub classid: String,
    /// Item instance.
    pub instanceid: String,
    /// Display name.
    pub name: String,
    /// Name used by the community market.
    pub market_hash_name: String,
    /// Icon path on the CDN.
    #[serde(default)]
    pub icon_url: String,
    /// Whether the item can be traded.
    #[serde(default, with = "int_bool")]
    pub tradable: bool,
    /// Whether the item can be sold on the market.
    #[serde(default, with = "int_bool")]
    pub marketable: bool,
}

/// `GetUserStatsForGame` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserStatsForGameResponse {
    /// Stats envelope.
    pub playerstats: PlayerStats,
}

/// A player's stats for one game.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStats {
    /// SteamID64.
    #[serde(rename = "steamID")]
    pub steam_id: SteamId,
    /// Game name.
    #[serde(rename = "gameName")]
    pub game_name: String,
    /// Numeric stats.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Achievements.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// A named numeric stat.
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    /// Stat name.
    pub name: String,
    /// Stat value.
    pub value: i64,
}

/// A named achievement.
#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    /// Achievement API name.
    pub name: String,
    /// Whether the player unlocked it.
    #[serde(with = "int_bool")]
    pub achieved: bool,
}

/// `GetOwnedGames` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGamesResponse {
    /// Response envelope.
    pub response: OwnedGames,
}

/// Games owned by a player.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnedGames {
    /// Number of games.
    #[serde(default)]
    pub game_count: u32,
    /// Owned games.
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// An owned game.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGame {
    /// Game id.
    pub appid: AppId,
    /// Game name (present with `include_appinfo`).
    #[serde(default)]
    pub name: Option<String>,
    /// Total minutes played.
    #[serde(default)]
    pub playtime_forever: u64,
    /// Icon hash.
    #[serde(default)]
    pub img_icon_url: Option<String>,
    /// Logo hash.
    #[serde(default)]
    pub img_logo_url: Option<String>,
}

/// `GetRecentlyPlayedGames` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedGamesResponse {
    /// Response envelope.
    pub response: RecentlyPlayedGames,
}

/// Games played in the last two weeks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentlyPlayedGames {
    /// Number of games.
    #[serde(default)]
    pub total_count: u32,
    /// Recently played games.
    #[serde(default)]
    pub games: Vec<RecentlyPlayedGame>,
}

/// A recently played game.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedGame {
    /// Game id.
    pub appid: AppId,
    /// Game name.
    #[serde(default)]
    pub name: Option<String>,
    /// Minutes played in the last two weeks.
    #[serde(default)]
    pub playtime_2weeks: u64,
    /// Total minutes played.
    #[serde(default)]
    pub playtime_forever: u64,
    /// Icon hash.
    #[serde(default)]
    pub img_icon_url: Option<String>,
    /// Logo hash.
    #[serde(default)]
    pub img_logo_url: Option<String>,
}
