//! Enumerations accepted by the API as query parameter values

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The value sent over the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(crate::Error::InvalidRequest(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }
    };
}

api_enum! {
    /// Games supported by the API.
    #[derive(Default)]
    pub enum Game {
        /// Counter-Strike 2
        #[default]
        Cs2 => "cs2",
        /// Rust
        Rust => "rust",
        /// Dota 2
        Dota => "dota",
    }
}

api_enum! {
    /// Languages item descriptions can be returned in.
    pub enum Language {
        /// Danish
        Danish => "danish",
        /// English
        English => "english",
        /// French
        French => "french",
        /// German
        German => "german",
        /// Polish
        Polish => "polish",
        /// Portuguese
        Portuguese => "portuguese",
        /// Russian
        Russian => "russian",
        /// Swedish
        Swedish => "swedish",
        /// Turkish
        Turkish => "turkish",
    }
}

api_enum! {
    /// Exterior wear of a skin.
    pub enum Wear {
        /// Factory New
        FactoryNew => "fn",
        /// Minimal Wear
        MinimalWear => "mw",
        /// Field-Tested
        FieldTested => "ft",
        /// Well-Worn
        WellWorn => "ww",
        /// Battle-Scarred
        BattleScarred => "bs",
    }
}

api_enum! {
    /// Sorting order for item listings.
    pub enum SortOrder {
        /// Cheapest first
        PriceAsc => "priceAz",
        /// Most expensive first
        PriceDesc => "priceZa",
        /// Cheapest real price first
        PriceRealAsc => "priceRealAz",
        /// Most expensive real price first
        PriceRealDesc => "priceRealZa",
        /// Lowest win/loss first
        WinLossAsc => "winLossAz",
        /// Highest win/loss first
        WinLossDesc => "winLossZa",
        /// Fewest sales first
        SoldAsc => "soldAz",
        /// Most sales first
        SoldDesc => "soldZa",
        /// By name
        ItemName => "name",
        /// Fewest points first
        PointsAsc => "pointsAz",
        /// Most points first
        PointsDesc => "pointsZa",
        /// Biggest price gain first
        Winner => "winner",
        /// Biggest price loss first
        Loser => "loser",
    }
}

api_enum! {
    /// Background color of generated screenshots.
    pub enum ScreenshotColorScheme {
        /// Black
        Black => "black",
        /// Blue
        Blue => "blue",
        /// Green
        Green => "green",
        /// Orange
        Orange => "orange",
        /// Purple
        Purple => "purple",
        /// Red
        Red => "red",
        /// White
        White => "white",
        /// Yellow
        Yellow => "yellow",
        /// Gray
        Gray => "gray",
    }
}

api_enum! {
    /// Corner the logo is anchored to in generated screenshots.
    pub enum ScreenshotLogoOffset {
        /// Top left
        TopLeft => "top left",
        /// Top right
        TopRight => "top right",
        /// Bottom left
        BottomLeft => "bottom left",
        /// Bottom right
        BottomRight => "bottom right",
    }
}

api_enum! {
    /// How a generated screenshot is delivered.
    pub enum ScreenshotFormat {
        /// Rendered image
        Screen => "screen",
        /// Image as a file download
        Download => "download",
        /// Base64-encoded image text
        Base64 => "base64",
    }
}

api_enum! {
    /// Where inventory data is read from.
    pub enum InventoryState {
        /// Live from Steam
        Active => "active",
        /// Live, falling back to the cache
        Fallback => "fallback",
        /// Cached only
        TakeDb => "takedb",
    }
}

api_enum! {
    /// Which sales an item history covers.
    pub enum ItemHistoryOrigin {
        /// Sales recorded by SteamWebAPI
        SteamWebApi => "steamwebapi",
        /// Sales across third-party markets
        Markets => "markets",
    }
}

api_enum! {
    /// Kind of item history data points.
    pub enum ItemHistoryType {
        /// Completed sales
        Sell => "sell",
        /// Open offers
        Offer => "offer",
        /// Daily median
        Median => "median",
    }
}

api_enum! {
    /// Market an item history is taken from.
    pub enum ItemHistorySource {
        /// Steam Community Market
        Steam => "steam",
        /// Skinport
        Skinport => "skinport",
    }
}
