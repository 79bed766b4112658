//! Request parameter types
//!
//! Each struct serializes to the query string of one endpoint: field names
//! are the wire names, `None` fields are left out.

use super::enums::{
    Game, InventoryState, ItemHistoryOrigin, ItemHistorySource, ItemHistoryType, Language,
    ScreenshotColorScheme, ScreenshotFormat, ScreenshotLogoOffset, SortOrder, Wear,
};
use crate::steamid::SteamId;
use derive_builder::Builder;
use serde::Serialize;

/// Parameters for listing market items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), default, build_fn(error = "crate::Error"))]
pub struct ItemsRequest {
    /// Game to list items for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,

    /// Maximum number of items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Page, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOrder>,

    /// Item group filter (rifle, knife, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_group: Option<String>,

    /// Item type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Base item name filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    /// Exterior filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wear: Option<Wear>,

    /// Lowest price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,

    /// Highest price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    /// ISO 4217 currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Only return these fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
}

impl ItemsRequest {
    /// Create a builder for constructing an ItemsRequest.
    pub fn builder() -> ItemsRequestBuilder {
        ItemsRequestBuilder::default()
    }
}

/// Parameters for fetching one inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct InventoryRequest {
    /// Owner of the inventory
    #[serde(rename = "id")]
    pub steam_id: SteamId,

    /// Game the inventory belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,

    /// Description language
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub language: Option<Language>,

    /// Return parsed items with market data instead of raw Steam data
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parse: Option<bool>,

    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub sort: Option<SortOrder>,

    /// Merge identical items into stacks
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub group: Option<bool>,

    /// ISO 4217 currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub currency: Option<String>,

    /// Where inventory data is read from
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub state: Option<InventoryState>,
}

impl InventoryRequest {
    /// Create a builder for constructing an InventoryRequest.
    pub fn builder() -> InventoryRequestBuilder {
        InventoryRequestBuilder::default()
    }
}

/// Parameters for fetching several inventories at once.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct InventoryBatchRequest {
    /// Owners of the inventories, at most 20
    pub steam_ids: Vec<SteamId>,

    /// Game the inventories belong to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,

    /// Description language
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub language: Option<Language>,

    /// Return parsed items with market data
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub parse: Option<bool>,

    /// ISO 4217 currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub currency: Option<String>,
}

impl InventoryBatchRequest {
    /// Create a builder for constructing an InventoryBatchRequest.
    pub fn builder() -> InventoryBatchRequestBuilder {
        InventoryBatchRequestBuilder::default()
    }
}

/// Parameters for an inventory's trade history.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct InventoryHistoryRequest {
    /// Owner of the inventory
    #[serde(rename = "id")]
    pub steam_id: SteamId,

    /// Game the inventory belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,
}

impl InventoryHistoryRequest {
    /// Create a builder for constructing an InventoryHistoryRequest.
    pub fn builder() -> InventoryHistoryRequestBuilder {
        InventoryHistoryRequestBuilder::default()
    }
}

/// Parameters for fetching one market item.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct ItemRequest {
    /// Steam market hash name
    pub market_hash_name: String,

    /// Game the item belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,

    /// ISO 4217 currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub currency: Option<String>,
}

impl ItemRequest {
    /// Create a builder for constructing an ItemRequest.
    pub fn builder() -> ItemRequestBuilder {
        ItemRequestBuilder::default()
    }
}

/// Parameters for an item's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct ItemHistoryRequest {
    /// Steam market hash name
    pub market_hash_name: String,

    /// Game the item belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,

    /// Which sales to include
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub origin: Option<ItemHistoryOrigin>,

    /// Kind of data points
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub history_type: Option<ItemHistoryType>,

    /// Market the history is taken from
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub source: Option<ItemHistorySource>,

    /// ISO 4217 currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub currency: Option<String>,
}

impl ItemHistoryRequest {
    /// Create a builder for constructing an ItemHistoryRequest.
    pub fn builder() -> ItemHistoryRequestBuilder {
        ItemHistoryRequestBuilder::default()
    }
}

/// Parameters for rendering an item screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct ScreenshotRequest {
    /// In-game inspect link
    pub url: String,

    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub color: Option<ScreenshotColorScheme>,

    /// Logo corner
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub logo_offset: Option<ScreenshotLogoOffset>,

    /// Delivery format
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub format: Option<ScreenshotFormat>,
}

impl ScreenshotRequest {
    /// Create a builder for constructing a ScreenshotRequest.
    pub fn builder() -> ScreenshotRequestBuilder {
        ScreenshotRequestBuilder::default()
    }
}

/// Parameters for item name suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into, strip_option), build_fn(error = "crate::Error"))]
pub struct AutocompleteRequest {
    /// Partial item name
    pub search: String,

    /// Game to search in
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub game: Option<Game>,

    /// Maximum number of suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub max: Option<u32>,
}

impl AutocompleteRequest {
    /// Create a builder for constructing an AutocompleteRequest.
    pub fn builder() -> AutocompleteRequestBuilder {
        AutocompleteRequestBuilder::default()
    }
}
