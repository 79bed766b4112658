//! Steam data endpoints
//!
//! Profiles, inventories, market items, float inspection and SteamID lookup.

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::{ResponseBody, routes},
    steamid::SteamId,
    types::{
        AutocompleteRequest, FloatData, InventoryBatchRequest, InventoryHistoryEntry,
        InventoryHistoryRequest, InventoryItem, InventoryRequest, Item, ItemAutocompleteResult,
        ItemHistoryEntry, ItemHistoryRequest, ItemRequest, ItemsRequest, Profile,
        ScreenshotRequest, SteamIdResponse,
    },
    validation::validate_batch_ids,
};
use bytes::Bytes;
use std::collections::HashMap;
use tracing::debug;

/// A rendered item screenshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Screenshot {
    /// Image bytes, for the `screen` and `download` formats
    Image(Bytes),
    /// Text payload, for the `base64` format or a JSON answer
    Text(String),
}

impl Screenshot {
    /// The image bytes, if this is an image.
    pub fn as_image(&self) -> Option<&Bytes> {
        match self {
            Self::Image(bytes) => Some(bytes),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }
}

impl From<ResponseBody> for Screenshot {
    fn from(body: ResponseBody) -> Self {
        match body {
            ResponseBody::Binary(bytes) => Self::Image(bytes),
            ResponseBody::Text(text) => Self::Text(text),
            ResponseBody::Json(value) => Self::Text(value.to_string()),
        }
    }
}

/// Steam API resource.
#[derive(Clone)]
pub struct Steam {
    client: Client,
}

impl Steam {
    /// Create a new Steam resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one Steam profile.
    pub async fn profile(&self, steam_id: SteamId) -> Result<Profile> {
        self.client
            .request(routes::PROFILE)?
            .query("id", steam_id.as_numeric())
            .send()
            .await?
            .parse()
    }

    /// Fetch up to twenty profiles in one call.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRequest` without sending anything if `steam_ids`
    /// is empty or holds more than twenty ids.
    pub async fn profiles(&self, steam_ids: &[SteamId]) -> Result<Vec<Profile>> {
        validate_batch_ids(steam_ids)?;

        self.client
            .request(routes::PROFILE_BATCH)?
            .query("ids", join_ids(steam_ids))
            .send()
            .await?
            .parse()
    }

    /// List market items.
    pub async fn items(&self, request: ItemsRequest) -> Result<Vec<Item>> {
        self.client
            .request(routes::ITEMS)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Fetch one inventory.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use steamwebapi::{Client, Game, InventoryRequest, SteamId};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = InventoryRequest::builder()
    ///     .steam_id(SteamId::parse("STEAM_1:1:2")?)
    ///     .game(Game::Cs2)
    ///     .parse(true)
    ///     .build()?;
    ///
    /// let value: f64 = client
    ///     .steam()
    ///     .inventory(request)
    ///     .await?
    ///     .iter()
    ///     .map(|item| item.stack_value())
    ///     .sum();
    /// println!("inventory value: {:.2}", value);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn inventory(&self, request: InventoryRequest) -> Result<Vec<InventoryItem>> {
        self.client
            .request(routes::INVENTORY)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Fetch up to twenty inventories in one call, keyed by 64-bit SteamID.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRequest` without sending anything if the
    /// request holds no ids or more than twenty.
    pub async fn inventories(
        &self,
        request: InventoryBatchRequest,
    ) -> Result<HashMap<String, Vec<InventoryItem>>> {
        validate_batch_ids(&request.steam_ids)?;

        self.client
            .request(routes::INVENTORY_BATCH)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Trade history of an inventory.
    pub async fn inventory_history(
        &self,
        request: InventoryHistoryRequest,
    ) -> Result<Vec<InventoryHistoryEntry>> {
        self.client
            .request(routes::INVENTORY_HISTORY)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Fetch one market item by hash name.
    pub async fn item(&self, request: ItemRequest) -> Result<Item> {
        self.client
            .request(routes::ITEM)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Price history of one market item.
    pub async fn item_history(&self, request: ItemHistoryRequest) -> Result<Vec<ItemHistoryEntry>> {
        self.client
            .request(routes::ITEM_HISTORY)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Inspect an item by its in-game inspect link.
    pub async fn float(&self, inspect_url: impl AsRef<str>) -> Result<FloatData> {
        self.client
            .request(routes::FLOAT)?
            .query("url", inspect_url.as_ref())
            .send()
            .await?
            .parse()
    }

    /// Render a screenshot of an item.
    ///
    /// Image formats come back as bytes; the `base64` format, or any JSON
    /// answer, comes back as text.
    pub async fn float_screenshot(&self, request: ScreenshotRequest) -> Result<Screenshot> {
        let response = self
            .client
            .request(routes::FLOAT_SCREENSHOT)?
            .query_params(&request)?
            .send()
            .await?;

        let screenshot = Screenshot::from(response.into_body());
        debug!(
            image = screenshot.as_image().is_some(),
            "Received float screenshot"
        );
        Ok(screenshot)
    }

    /// Suggest item names for a partial search.
    pub async fn autocomplete(
        &self,
        request: AutocompleteRequest,
    ) -> Result<Vec<ItemAutocompleteResult>> {
        self.client
            .request(routes::AUTOCOMPLETE)?
            .query_params(&request)?
            .send()
            .await?
            .parse()
    }

    /// Resolve any form of SteamID, or a vanity name, to every textual form.
    pub async fn steam_id_info(&self, id: impl AsRef<str>) -> Result<SteamIdResponse> {
        self.client
            .request(routes::STEAMID_INFO)?
            .query("id", id.as_ref())
            .send()
            .await?
            .parse()
    }
}

impl Resource for Steam {
    fn client(&self) -> &Client {
        &self.client
    }
}

fn join_ids(steam_ids: &[SteamId]) -> String {
    steam_ids
        .iter()
        .map(SteamId::as_numeric)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::types::{Game, ItemHistoryType, ScreenshotFormat};
    use std::sync::Arc;
    use steamwebapi_transport::testing::ScriptedTransport;

    fn client(transport: &ScriptedTransport) -> Client {
        Client::builder()
            .api_key("test-key")
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_screenshot_from_body() {
        assert_eq!(
            Screenshot::from(ResponseBody::Binary(Bytes::from_static(b"\x89PNG"))),
            Screenshot::Image(Bytes::from_static(b"\x89PNG"))
        );
        assert_eq!(
            Screenshot::from(ResponseBody::Json(serde_json::json!({"ok": true}))).as_text(),
            Some(r#"{"ok":true}"#)
        );
    }

    #[test]
    fn test_join_ids() {
        let ids = [SteamId::from(1u32), SteamId::from(5u32)];
        assert_eq!(join_ids(&ids), "76561197960265729,76561197960265733");
    }

    #[tokio::test]
    async fn test_profiles_rejects_empty_batch_without_sending() {
        let transport = ScriptedTransport::new();

        let result = client(&transport).steam().profiles(&[]).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_inventories_rejects_oversized_batch_without_sending() {
        let transport = ScriptedTransport::new();
        let request = InventoryBatchRequest::builder()
            .steam_ids((1..=21u32).map(SteamId::from).collect::<Vec<_>>())
            .build()
            .unwrap();

        let result = client(&transport).steam().inventories(request).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_item_history_query() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            200,
            r#"[{"id": 1, "createdat": "2024-03-01 12:00:00.000000", "price": 1.5}]"#,
        );
        let request = ItemHistoryRequest::builder()
            .market_hash_name("AK-47 | Redline (Field-Tested)")
            .game(Game::Cs2)
            .history_type(ItemHistoryType::Sell)
            .build()
            .unwrap();

        let history = client(&transport)
            .steam()
            .item_history(request)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, 1.5);

        let sent = transport.sent();
        assert!(sent[0].url.ends_with("/steam/api/history"));
        assert_eq!(
            sent[0].query_value("market_hash_name"),
            Some("AK-47 | Redline (Field-Tested)")
        );
        assert_eq!(sent[0].query_value("type"), Some("sell"));
        assert_eq!(sent[0].query_value("game"), Some("cs2"));
    }

    #[tokio::test]
    async fn test_float_screenshot_base64_is_text() {
        let transport = ScriptedTransport::new();
        transport.push_with_headers(200, &[("content-type", "text/plain")], "aGVsbG8=");
        let request = ScreenshotRequest::builder()
            .url("steam://rungame/730/76561202255233023/+csgo_econ_action_preview%20S1A2D3")
            .format(ScreenshotFormat::Base64)
            .build()
            .unwrap();

        let screenshot = client(&transport)
            .steam()
            .float_screenshot(request)
            .await
            .unwrap();
        assert_eq!(screenshot, Screenshot::Text("aGVsbG8=".to_string()));
        assert_eq!(transport.sent()[0].query_value("format"), Some("base64"));
    }

    #[tokio::test]
    async fn test_steam_id_info_passes_raw_id() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            200,
            r#"{"steamids": {"steamid2": "STEAM_1:1:2", "steamid3": "[U:1:5]", "steamid64": "76561197960265733"}}"#,
        );

        let info = client(&transport)
            .steam()
            .steam_id_info("gaben")
            .await
            .unwrap();
        assert_eq!(info.steam_id().unwrap(), SteamId::from(5u32));
        assert_eq!(transport.sent()[0].query_value("id"), Some("gaben"));
    }
}
