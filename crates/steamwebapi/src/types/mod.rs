//! Core types for the SteamWebAPI
//!
//! Response models, request parameters and the string enums the API
//! accepts. Field names follow Rust conventions; the wire names are kept
//! in serde attributes.

pub use account::*;
pub use currency::*;
pub use enums::*;
pub use float::*;
pub use inventory::*;
pub use item::*;
pub use profile::*;
pub use requests::*;
pub use steamid_response::*;

pub mod account;
pub mod currency;
pub mod enums;
pub mod float;
pub mod inventory;
pub mod item;
pub mod profile;
pub mod requests;
pub mod steamid_response;
pub mod timestamp;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<AccountInformation>();
        assert_send_sync::<ExchangeRates>();
        assert_send_sync::<InventoryItem>();
        assert_send_sync::<Item>();
        assert_send_sync::<Profile>();
        assert_send_sync::<ItemsRequest>();
    }
}
