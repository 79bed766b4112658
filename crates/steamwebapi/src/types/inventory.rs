//! Inventory types and the item detail records they share with market items

use super::float::FloatData;
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stack of items in a Steam inventory, with market statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item identifier
    pub id: String,

    /// Steam market hash name
    #[serde(rename = "markethashname")]
    pub market_hash_name: String,

    /// Name normalized for search
    #[serde(rename = "normalizedname", default)]
    pub normalized_name: Option<String>,

    /// Display name on the market
    #[serde(rename = "marketname")]
    pub market_name: String,

    /// URL slug
    pub slug: String,

    /// Number of identical items in this stack
    pub count: u32,

    /// Steam asset id
    #[serde(rename = "assetid")]
    pub asset_id: String,

    /// Steam class id
    #[serde(rename = "classid")]
    pub class_id: String,

    /// Steam instance id
    #[serde(rename = "instanceid")]
    pub instance_id: String,

    /// Item group id
    #[serde(rename = "groupid")]
    pub group_id: String,

    /// Price confidence note
    #[serde(rename = "infoprice")]
    pub info_price: String,

    // Price statistics
    /// Latest known price
    #[serde(rename = "pricelatest")]
    pub price_latest: f64,
    /// Latest sale price
    #[serde(rename = "pricelatestsell")]
    pub price_latest_sell: f64,
    /// Latest sale price, last 24 hours
    #[serde(rename = "pricelatestsell24h")]
    pub price_latest_sell_24h: f64,
    /// Latest sale price, last 7 days
    #[serde(rename = "pricelatestsell7d")]
    pub price_latest_sell_7d: f64,
    /// Latest sale price, last 30 days
    #[serde(rename = "pricelatestsell30d")]
    pub price_latest_sell_30d: f64,
    /// Latest sale price, last 90 days
    #[serde(rename = "pricelatestsell90d")]
    pub price_latest_sell_90d: f64,

    /// Time of the latest Steam sale
    #[serde(
        rename = "lateststeamsellat",
        default,
        with = "timestamp::option"
    )]
    pub latest_steam_sell_at: Option<DateTime<Utc>>,

    /// The ten most recent Steam sales
    #[serde(rename = "latest10steamsales", default)]
    pub latest_10_steam_sales: Option<Vec<SteamSale>>,

    /// Median price
    #[serde(rename = "pricemedian")]
    pub price_median: f64,
    /// Median price, last 24 hours
    #[serde(rename = "pricemedian24h")]
    pub price_median_24h: f64,
    /// Median price, last 7 days
    #[serde(rename = "pricemedian7d")]
    pub price_median_7d: f64,
    /// Median price, last 30 days
    #[serde(rename = "pricemedian30d")]
    pub price_median_30d: f64,
    /// Median price, last 90 days
    #[serde(rename = "pricemedian90d")]
    pub price_median_90d: f64,
    /// Average price
    #[serde(rename = "priceavg")]
    pub price_avg: f64,
    /// Average price, last 24 hours
    #[serde(rename = "priceavg24h")]
    pub price_avg_24h: f64,
    /// Average price, last 7 days
    #[serde(rename = "priceavg7d")]
    pub price_avg_7d: f64,
    /// Average price, last 30 days
    #[serde(rename = "priceavg30d")]
    pub price_avg_30d: f64,
    /// Average price, last 90 days
    #[serde(rename = "priceavg90d")]
    pub price_avg_90d: f64,
    /// Manipulation-resistant price
    #[serde(rename = "pricesafe")]
    pub price_safe: f64,
    /// Lowest price
    #[serde(rename = "pricemin")]
    pub price_min: f64,
    /// Highest price
    #[serde(rename = "pricemax")]
    pub price_max: f64,
    /// Blended price
    #[serde(rename = "pricemix")]
    pub price_mix: f64,

    // Order book
    /// Highest buy order
    #[serde(rename = "buyorderprice")]
    pub buy_order_price: f64,
    /// Median buy order
    #[serde(rename = "buyordermedian")]
    pub buy_order_median: f64,
    /// Average buy order
    #[serde(rename = "buyorderavg")]
    pub buy_order_avg: f64,
    /// Buy order volume
    #[serde(rename = "buyordervolume")]
    pub buy_order_volume: f64,
    /// Sell offer volume
    #[serde(rename = "offervolume")]
    pub offer_volume: f64,

    // Sales volume
    /// Sold today
    #[serde(rename = "soldtoday")]
    pub sold_today: u64,
    /// Sold in the last 24 hours
    #[serde(rename = "sold24h")]
    pub sold_24h: u64,
    /// Sold in the last 7 days
    #[serde(rename = "sold7d")]
    pub sold_7d: u64,
    /// Sold in the last 30 days
    #[serde(rename = "sold30d")]
    pub sold_30d: u64,
    /// Sold in the last 90 days
    #[serde(rename = "sold90d")]
    pub sold_90d: u64,
    /// Sold in total
    #[serde(rename = "soldtotal")]
    pub sold_total: u64,
    /// Average hours until a listing sells
    #[serde(rename = "hourstosold")]
    pub hours_to_sold: f64,
    /// Popularity score
    pub points: f64,

    /// Time prices were last refreshed
    #[serde(rename = "priceupdatedat", with = "timestamp")]
    pub price_updated_at: DateTime<Utc>,

    /// Custom name tag
    #[serde(default)]
    pub nametag: Option<String>,

    /// Border color (hex)
    #[serde(rename = "bordercolor")]
    pub border_color: String,
    /// Name color (hex)
    pub color: String,
    /// Quality name
    pub quality: String,
    /// Rarity name
    #[serde(default)]
    pub rarity: Option<String>,

    /// Image URL
    pub image: String,
    /// Inventory-specific image URL
    #[serde(rename = "itemimage", default)]
    pub item_image: Option<String>,

    /// Whether the item can be listed on the market
    pub marketable: bool,
    /// Whether the item can be traded
    pub tradable: bool,
    /// Whether the price data is considered unstable
    #[serde(default)]
    pub unstable: Option<bool>,
    /// Why the price data is unstable
    #[serde(rename = "unstablereason", default)]
    pub unstable_reason: Option<String>,

    /// Steam tags
    #[serde(default)]
    pub tags: Option<Vec<ItemTag>>,
    /// Steam descriptions
    #[serde(default)]
    pub descriptions: Option<Vec<ItemDescription>>,
    /// Steam actions (inspect links and the like)
    #[serde(default)]
    pub actions: Option<Vec<ItemAction>>,

    /// When the item was first recorded
    #[serde(rename = "createdat", default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unix time the item was first seen
    #[serde(rename = "firstseentime", default)]
    pub first_seen_time: Option<f64>,
    /// When the item was first seen
    #[serde(rename = "firstseenat", default, with = "timestamp::option")]
    pub first_seen_at: Option<DateTime<Utc>>,

    /// Steam market URL
    #[serde(rename = "steamurl")]
    pub steam_url: String,
    /// In-game inspect link
    #[serde(rename = "inspectlink", default)]
    pub inspect_link: Option<String>,
    /// Parts of the inspect link
    #[serde(rename = "inspectlinkparsed", default)]
    pub inspect_link_parsed: Option<ParsedInspectLink>,
    /// Market trade restriction note
    #[serde(rename = "markettradablerestriction", default)]
    pub market_tradable_restriction: Option<String>,

    /// Category tag
    #[serde(default)]
    pub tag1: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag2: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag3: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag4: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag5: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag6: Option<String>,
    /// Category tag
    #[serde(default)]
    pub tag7: Option<String>,

    /// Real-money price confidence note
    #[serde(rename = "infopricereal", default)]
    pub info_price_real: Option<String>,
    /// Real-money price
    #[serde(rename = "pricereal", default)]
    pub price_real: Option<f64>,
    /// Real-money price, last 24 hours
    #[serde(rename = "pricereal24h", default)]
    pub price_real_24h: Option<f64>,
    /// Real-money price, last 7 days
    #[serde(rename = "pricereal7d", default)]
    pub price_real_7d: Option<f64>,
    /// Real-money price, last 30 days
    #[serde(rename = "pricereal30d", default)]
    pub price_real_30d: Option<f64>,
    /// Real-money price, last 90 days
    #[serde(rename = "pricereal90d", default)]
    pub price_real_90d: Option<f64>,
    /// Real-money median
    #[serde(rename = "pricerealmedian", default)]
    pub price_real_median: Option<f64>,
    /// Price change ratio
    #[serde(rename = "winloss", default)]
    pub win_loss: Option<f64>,

    /// Prices on other markets
    #[serde(default)]
    pub prices: Option<Vec<MarketPrice>>,
    /// Inspection data
    #[serde(rename = "float", default)]
    pub float_data: Option<FloatData>,
    /// Owner-specific descriptions
    #[serde(rename = "ownerdescription", default)]
    pub owner_description: Option<Vec<OwnerDescription>>,
    /// End of the trade hold, as reported
    #[serde(rename = "tradeblockuntil", default)]
    pub trade_block_until: Option<String>,
}

impl InventoryItem {
    /// Alias for [`tradable`](Self::tradable).
    pub fn tradeable(&self) -> bool {
        self.tradable
    }

    /// Alias for [`market_tradable_restriction`](Self::market_tradable_restriction).
    pub fn market_tradeable_restriction(&self) -> Option<&str> {
        self.market_tradable_restriction.as_deref()
    }

    /// Estimated value of the whole stack at the safe price.
    pub fn stack_value(&self) -> f64 {
        self.price_safe * f64::from(self.count)
    }
}

/// One entry of an inventory's trade history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryHistoryEntry {
    /// Item name
    pub item_name: String,
    /// When the item entered or left the inventory
    #[serde(with = "timestamp")]
    pub transaction_date: DateTime<Utc>,
    /// What happened
    pub action: String,
    /// Game the item belongs to
    pub game: String,
}

/// A Steam item tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTag {
    /// Tag category
    pub category: String,
    /// Internal tag name
    pub internal_name: String,
    /// Category display name
    pub localized_category_name: String,
    /// Tag display name
    pub localized_tag_name: String,
    /// Display color (hex)
    #[serde(default)]
    pub color: Option<String>,
}

/// A line of an item's description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescription {
    /// Content type (`html`, `text`, ...)
    #[serde(rename = "type")]
    pub description_type: String,
    /// Content
    pub value: String,
    /// Display color (hex)
    #[serde(default)]
    pub color: Option<String>,
}

/// A line of an owner-specific description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerDescription {
    /// Content type
    #[serde(rename = "type")]
    pub description_type: String,
    /// Content
    pub value: String,
    /// Display color (hex)
    #[serde(default)]
    pub color: Option<String>,
}

/// A link offered by Steam for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAction {
    /// Target URL
    pub link: String,
    /// Label
    pub name: String,
}

/// A price on a third-party market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    /// Market name
    pub market: String,
    /// Price
    pub price: f64,
    /// Listing URL
    pub url: String,
    /// Currency of `price`
    pub currency: String,
    /// When the price was read
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// The `S`/`A`/`D`/`M` parts of an inspect link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInspectLink {
    /// Owner SteamID, for inventory links
    pub s: String,
    /// Asset id
    pub a: String,
    /// Inspect parameter
    pub d: String,
    /// Market listing id, for market links
    pub m: String,
}

/// A single Steam market sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamSale {
    /// Sale price
    pub price: f64,
    /// Unix time of the sale
    pub timestamp: f64,
    /// Time of the sale
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
}
