//! Float (wear value) inspection types

use serde::{Deserialize, Serialize};

/// Inspection result for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatData {
    /// Exact wear value
    #[serde(rename = "float")]
    pub float_value: f64,

    /// Doppler-style phase, if any
    #[serde(default)]
    pub phase: Option<String>,

    /// Item type
    #[serde(rename = "type")]
    pub item_type: String,

    /// How the item was obtained
    pub origin: f64,

    /// Pattern seed
    #[serde(rename = "paintseed")]
    pub paint_seed: u32,

    /// Paint kit index
    #[serde(rename = "paintindex")]
    pub paint_index: u32,

    /// Rank of this float among all known copies
    #[serde(default)]
    pub rank: Option<u64>,

    /// Definition index
    #[serde(rename = "defindex")]
    pub def_index: u32,

    /// Rarity index
    pub rarity: u32,

    /// Quality index
    pub quality: u32,

    /// Known copies of this skin
    #[serde(rename = "totalcount", default)]
    pub total_count: Option<u64>,

    /// Exterior name
    pub wear: String,

    /// Lowest possible float for this skin
    pub min: f64,

    /// Highest possible float for this skin
    pub max: f64,

    /// Whether stickers are applied
    #[serde(rename = "hassticker")]
    pub has_sticker: bool,

    /// Whether a keychain is attached
    #[serde(rename = "haskeychain")]
    pub has_keychain: bool,

    /// Number of stickers
    #[serde(rename = "stickeramount")]
    pub sticker_amount: u32,

    /// Number of keychains
    #[serde(rename = "keychainamount")]
    pub keychain_amount: u32,

    /// Applied stickers
    #[serde(default)]
    pub stickers: Vec<StickerData>,

    /// Attached keychains
    #[serde(default)]
    pub keychains: Vec<KeychainData>,
}

/// A sticker applied to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerData {
    /// Slot position
    pub slot: u32,
    /// Sticker definition
    #[serde(rename = "stickerid")]
    pub sticker_id: u64,
    /// Scrape level
    #[serde(default)]
    pub wear: Option<f64>,
    /// Scale
    #[serde(default)]
    pub scale: Option<f64>,
    /// Rotation
    #[serde(default)]
    pub rotation: Option<f64>,
    /// Tint
    #[serde(rename = "tintid", default)]
    pub tint_id: Option<f64>,
    /// Horizontal offset
    #[serde(rename = "offsetx", default)]
    pub offset_x: Option<f64>,
    /// Vertical offset
    #[serde(rename = "offsety", default)]
    pub offset_y: Option<f64>,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
}

/// A keychain attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeychainData {
    /// Slot position
    pub slot: u32,
    /// Keychain definition
    pub keychain_id: u64,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
}

impl FloatData {
    /// Where this float sits between the skin's bounds, from 0.0 (min) to 1.0 (max).
    pub fn relative_wear(&self) -> Option<f64> {
        let span = self.max - self.min;
        (span > 0.0).then(|| ((self.float_value - self.min) / span).clamp(0.0, 1.0))
    }
}
