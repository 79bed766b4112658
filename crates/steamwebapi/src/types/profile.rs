//! Steam profile types

use crate::steamid::SteamId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Steam community profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// 64-bit SteamID
    #[serde(rename = "steamid")]
    pub steam_id: SteamId,

    /// Display name
    #[serde(rename = "personaname")]
    pub persona_name: String,

    /// Account login name, when public
    #[serde(rename = "accountname", default)]
    pub account_name: Option<String>,

    /// Custom profile URL
    #[serde(rename = "profileurl", default)]
    pub profile_url: Option<String>,

    /// Canonical community URL
    #[serde(rename = "profilesteamurl")]
    pub profile_steam_url: String,

    /// Avatar hash
    #[serde(rename = "avatarhash")]
    pub avatar_hash: String,

    /// Small avatar URL
    pub avatar: String,

    /// Medium avatar URL
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: String,

    /// Full-size avatar URL
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,

    /// Real name, when public
    #[serde(rename = "realname", default)]
    pub real_name: Option<String>,

    /// Visibility description
    #[serde(rename = "communityvisibilitymessage")]
    pub community_visibility_message: String,

    /// Visibility state (3 = public)
    #[serde(rename = "communityvisibilitystate")]
    pub community_visibility_state: i32,

    /// Whether the profile is configured
    #[serde(rename = "profilestate")]
    pub profile_state: i32,

    /// Online status
    #[serde(rename = "onlinestate")]
    pub online_state: String,

    /// Current game, if playing
    #[serde(rename = "ingameinfo", default)]
    pub ingame_info: Value,

    /// Unix time the account was created
    #[serde(rename = "timecreated")]
    pub time_created: i64,

    /// Account creation time, ISO 8601 with a `+00:00` offset
    #[serde(rename = "timecreatedat")]
    pub time_created_at: String,

    /// Location
    #[serde(default)]
    pub location: Option<String>,

    /// Country code
    #[serde(rename = "loccountrycode", default)]
    pub location_country_code: Option<String>,

    /// Profile summary
    #[serde(default)]
    pub summary: String,

    /// Number of VAC bans
    pub vac: i32,

    /// Whether the account is limited
    #[serde(rename = "islimited")]
    pub is_limited: i32,

    /// Total playtime across most played games
    #[serde(rename = "mostplayedgamestotalplaytime", default)]
    pub most_played_games_total_playtime: Value,

    /// Playtime over the last two weeks
    #[serde(rename = "mostplayedgames2weeksplaytime", default)]
    pub most_played_games_2_weeks_playtime: Value,

    /// App ids of the most played games
    #[serde(rename = "mostplayedgamesappids", default)]
    pub most_played_games_app_ids: Vec<Value>,

    /// Most played games
    #[serde(rename = "mostplayedgames", default)]
    pub most_played_games: Vec<Value>,

    /// Playtime per most played game
    #[serde(rename = "mostplayedgamestimes", default)]
    pub most_played_games_times: Vec<Value>,

    /// Friend list visibility
    #[serde(rename = "friendsstate")]
    pub friends_state: i32,

    /// Number of friends
    #[serde(rename = "friendscount")]
    pub friends_count: u32,

    /// Number of owned games
    #[serde(rename = "gamescount")]
    pub games_count: u32,

    /// Number of groups
    #[serde(rename = "groupscount", default)]
    pub groups_count: Option<u32>,

    /// Number of badges
    #[serde(rename = "badgescount", default)]
    pub badges_count: Option<u32>,

    /// Trade ban state
    #[serde(rename = "tradeban")]
    pub trade_ban: i32,

    /// Number of game bans
    #[serde(rename = "gameban")]
    pub game_ban: i32,

    /// Days since the last ban
    #[serde(rename = "lastbandays", default)]
    pub last_ban_days: Option<u32>,

    /// Steam level
    pub level: u32,
}

impl Profile {
    /// Account creation time, if it parses.
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        super::timestamp::parse_iso_utc_timestamp(&self.time_created_at).ok()
    }

    /// Whether the account carries any VAC or game ban.
    pub fn is_banned(&self) -> bool {
        self.vac > 0 || self.game_ban > 0
    }
}
