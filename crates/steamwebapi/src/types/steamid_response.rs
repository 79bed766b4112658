//! SteamID lookup response

use crate::steamid::{InvalidSteamId, SteamId};
use serde::{Deserialize, Deserializer, Serialize};

/// Every textual form of one SteamID, as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SteamIdResponse {
    /// Legacy form, `STEAM_X:Y:Z`
    pub steamid2: String,
    /// Bracketed form, `[U:1:N]`
    pub steamid3: String,
    /// 64-bit form
    pub steamid64: String,
}

impl SteamIdResponse {
    /// Parse the 64-bit form.
    ///
    /// # Errors
    ///
    /// Returns an error if the API reported a malformed id.
    pub fn steam_id(&self) -> Result<SteamId, InvalidSteamId> {
        self.steamid64.parse()
    }
}

impl<'de> Deserialize<'de> for SteamIdResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Ids {
            steamid2: String,
            steamid3: String,
            steamid64: String,
        }

        #[derive(Deserialize)]
        struct Wire {
            steamids: Ids,
        }

        let Ids {
            steamid2,
            steamid3,
            steamid64,
        } = Wire::deserialize(deserializer)?.steamids;

        Ok(Self {
            steamid2,
            steamid3,
            steamid64,
        })
    }
}
