//! # steamwebapi
//!
//! Async Rust client for the SteamWebAPI marketplace data service:
//! - Steam profiles and inventories
//! - Market items, price history and autocomplete
//! - Float inspection and item screenshots
//! - Currency exchange rates
//! - SteamID conversion between every textual form
//! - Automatic retries with linear backoff and rate-limit handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use steamwebapi::{Client, Game, ItemsRequest, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key");
//!
//!     let items = client
//!         .steam()
//!         .items(
//!             ItemsRequest::builder()
//!                 .game(Game::Cs2)
//!                 .sort_by(SortOrder::PriceDesc)
//!                 .max(10u32)
//!                 .build()?,
//!         )
//!         .await?;
//!
//!     for item in items {
//!         println!("{}: {:?}", item.market_hash_name, item.price_latest);
//!     }
//!
//!     client.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## SteamIDs
//!
//! ```rust
//! use steamwebapi::SteamId;
//!
//! let id = SteamId::parse("STEAM_1:1:2")?;
//! assert_eq!(id.as_bracketed(), "[U:1:5]");
//! assert_eq!(id.as_u64(), 76561197960265733);
//! # Ok::<(), steamwebapi::steamid::InvalidSteamId>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{AuthLocation, ClientConfig, ConnectionPoolConfig};
pub use error::{ApiErrorKind, ApiErrorPayload, Error, Result};
pub use resources::Screenshot;
pub use self::http::{RawResponse, RetryConfig};
pub use steamid::SteamId;
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod steamid;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;
pub use steamwebapi_transport::{HttpTransport, Transport, TransportError};

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use steamwebapi::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, Result, SteamId,
        types::{
            Game, InventoryItem, InventoryRequest, Item, ItemRequest, ItemsRequest, Language,
            Profile, SortOrder, Wear,
        },
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.steamwebapi.com";
