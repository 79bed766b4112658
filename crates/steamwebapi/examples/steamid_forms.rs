//! Convert SteamIDs between their textual forms, offline.
//!
//! ```sh
//! cargo run --example steamid_forms -- STEAM_0:1:2 "[U:1:5]" 76561197960265733
//! ```

use steamwebapi::SteamId;

fn main() {
    for arg in std::env::args().skip(1) {
        match SteamId::parse(&arg) {
            Ok(id) => println!(
                "{arg:>24} -> {} | {} | {} | account {}",
                id.as_legacy(),
                id.as_bracketed(),
                id.as_numeric(),
                id.as_account_id()
            ),
            Err(e) => eprintln!("{arg:>24} -> {e}"),
        }
    }
}
