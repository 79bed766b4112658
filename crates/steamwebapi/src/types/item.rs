//! Market item types

use super::inventory::{ItemDescription, ItemTag, MarketPrice, SteamSale};
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A market item with price statistics.
///
/// Market listings carry fewer guaranteed fields than inventory items, so
/// most statistics are optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Steam market hash name
    #[serde(rename = "markethashname")]
    pub market_hash_name: String,

    /// Name normalized for search
    #[serde(rename = "normalizedname", default)]
    pub normalized_name: Option<String>,

    /// Display name on the market
    #[serde(rename = "marketname", default)]
    pub market_name: Option<String>,

    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,

    /// Steam class id
    #[serde(rename = "classid", default)]
    pub class_id: Option<String>,

    /// Item group id
    #[serde(rename = "groupid", default)]
    pub group_id: Option<String>,

    /// Item group name (rifle, knife, ...)
    #[serde(rename = "itemgroup", default)]
    pub item_group: Option<String>,

    /// Group display name
    #[serde(rename = "groupname", default)]
    pub group_name: Option<String>,

    /// Base item name (weapon or item kind)
    #[serde(rename = "itemname", default)]
    pub item_name: Option<String>,

    /// Exterior code
    #[serde(default)]
    pub wear: Option<String>,

    /// Whether this is a ★ item
    #[serde(rename = "isstar", default)]
    pub is_star: Option<bool>,

    /// Whether this is StatTrak™
    #[serde(rename = "isstattrak", default)]
    pub is_stattrak: Option<bool>,

    /// Whether this is a souvenir
    #[serde(rename = "issouvenir", default)]
    pub is_souvenir: Option<bool>,

    /// Price confidence note
    #[serde(rename = "infoprice", default)]
    pub info_price: Option<String>,

    /// Latest known price
    #[serde(rename = "pricelatest", default)]
    pub price_latest: Option<f64>,
    /// Latest sale price
    #[serde(rename = "pricelatestsell", default)]
    pub price_latest_sell: Option<f64>,
    /// Median price
    #[serde(rename = "pricemedian", default)]
    pub price_median: Option<f64>,
    /// Median price, last 7 days
    #[serde(rename = "pricemedian7d", default)]
    pub price_median_7d: Option<f64>,
    /// Median price, last 30 days
    #[serde(rename = "pricemedian30d", default)]
    pub price_median_30d: Option<f64>,
    /// Average price
    #[serde(rename = "priceavg", default)]
    pub price_avg: Option<f64>,
    /// Manipulation-resistant price
    #[serde(rename = "pricesafe", default)]
    pub price_safe: Option<f64>,
    /// Lowest price
    #[serde(rename = "pricemin", default)]
    pub price_min: Option<f64>,
    /// Highest price
    #[serde(rename = "pricemax", default)]
    pub price_max: Option<f64>,
    /// Blended price
    #[serde(rename = "pricemix", default)]
    pub price_mix: Option<f64>,
    /// Real-money price
    #[serde(rename = "pricereal", default)]
    pub price_real: Option<f64>,
    /// Highest buy order
    #[serde(rename = "buyorderprice", default)]
    pub buy_order_price: Option<f64>,
    /// Sell offer volume
    #[serde(rename = "offervolume", default)]
    pub offer_volume: Option<f64>,
    /// Sold in the last 24 hours
    #[serde(rename = "sold24h", default)]
    pub sold_24h: Option<u64>,
    /// Sold in the last 7 days
    #[serde(rename = "sold7d", default)]
    pub sold_7d: Option<u64>,
    /// Sold in total
    #[serde(rename = "soldtotal", default)]
    pub sold_total: Option<u64>,
    /// Price change ratio
    #[serde(rename = "winloss", default)]
    pub win_loss: Option<f64>,
    /// Absolute price change
    #[serde(rename = "winlossprice", default)]
    pub win_loss_price: Option<f64>,
    /// Popularity score
    #[serde(default)]
    pub points: Option<f64>,

    /// Time prices were last refreshed
    #[serde(rename = "priceupdatedat", default, with = "timestamp::option")]
    pub price_updated_at: Option<DateTime<Utc>>,
    /// Time of the latest Steam sale
    #[serde(rename = "lateststeamsellat", default, with = "timestamp::option")]
    pub latest_steam_sell_at: Option<DateTime<Utc>>,
    /// When the item was first recorded
    #[serde(rename = "createdat", default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the item was first seen
    #[serde(rename = "firstseenat", default, with = "timestamp::option")]
    pub first_seen_at: Option<DateTime<Utc>>,

    /// The ten most recent Steam sales
    #[serde(rename = "latest10steamsales", default)]
    pub latest_10_steam_sales: Option<Vec<SteamSale>>,

    /// Border color (hex)
    #[serde(rename = "bordercolor", default)]
    pub border_color: Option<String>,
    /// Name color (hex)
    #[serde(default)]
    pub color: Option<String>,
    /// Quality name
    #[serde(default)]
    pub quality: Option<String>,
    /// Rarity name
    #[serde(default)]
    pub rarity: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the item can be listed on the market
    #[serde(default)]
    pub marketable: Option<bool>,
    /// Whether the item can be traded
    #[serde(default)]
    pub tradable: Option<bool>,

    /// Steam tags
    #[serde(default)]
    pub tags: Option<Vec<ItemTag>>,
    /// Steam descriptions
    #[serde(default)]
    pub descriptions: Option<Vec<ItemDescription>>,
    /// Prices on other markets
    #[serde(default)]
    pub prices: Option<Vec<MarketPrice>>,

    /// Steam market URL
    #[serde(rename = "steamurl", default)]
    pub steam_url: Option<String>,
}

/// One search suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAutocompleteResult {
    /// Steam market hash name
    #[serde(rename = "markethashname")]
    pub market_hash_name: String,
    /// Image URL
    pub image: String,
}

/// One point of an item's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHistoryEntry {
    /// Entry identifier
    pub id: u64,
    /// When the price was recorded
    #[serde(rename = "createdat", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Price
    pub price: f64,
    /// Whether the entry is a completed sale
    #[serde(default)]
    pub sold: Option<bool>,
}
