//! Steam endpoint constants.

/// Base URL for the Steam Web API.
pub const STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

/// Base URL for the Steam community site.
pub const STEAM_COMMUNITY_BASE_URL: &str = "https://steamcommunity.com";

/// Web API endpoints (API key required).
pub mod api {
    /// Get player profile summaries.
    pub const PLAYER_SUMMARIES: &str = "/ISteamUser/GetPlayerSummaries/v2/";
    /// Get a player's stats and achievements for a game.
    pub const USER_STATS_FOR_GAME: &str = "/ISteamUserStats/GetUserStatsForGame/v2/";
    /// Get the games a player owns.
    pub const OWNED_GAMES: &str = "/IPlayerService/GetOwnedGames/v1/";
    /// Get the games a player played in the last two weeks.
    pub const RECENTLY_PLAYED_GAMES: &str = "/IPlayerService/GetRecentlyPlayedGames/v1/";
}

/// Community endpoints (session id required for writes).
pub mod community {
    /// Inventory listing prefix, followed by `/{steamid}/{appid}/{contextid}`.
    pub const INVENTORY: &str = "/inventory";
    /// Password login.
    pub const DO_LOGIN: &str = "/login/dologin";
    /// Send a friend request.
    pub const ADD_FRIEND: &str = "/actions/AddFriendAjax";
    /// Remove a friend.
    pub const REMOVE_FRIEND: &str = "/actions/RemoveFriendAjax";
    /// Accept a pending friend request.
    pub const ACCEPT_FRIEND: &str = "/actions/AcceptFriendRequest";
    /// Send a trade offer.
    pub const SEND_TRADE_OFFER: &str = "/tradeoffer/new/send";
    /// List an item on the community market.
    pub const SELL_ITEM: &str = "/market/sellitem/";
    /// List pending mobile confirmations.
    pub const CONFIRMATIONS: &str = "/mobileconf/getlist";
    /// Accept or cancel a mobile confirmation.
    pub const CONFIRMATION_OP: &str = "/mobileconf/ajaxop";
}

/// Inventory page size requested from the community site.
pub const INVENTORY_PAGE_SIZE: u32 = 5000;
