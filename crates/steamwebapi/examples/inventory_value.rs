//! Estimate the value of several CS2 inventories.
//!
//! Reads the API key from `STEAMWEBAPI_KEY` (or `.env`) and SteamIDs, in any
//! textual form, from the command line.
//!
//! ```sh
//! cargo run --example inventory_value -- STEAM_1:1:2 "[U:1:22202]"
//! ```

use steamwebapi::prelude::*;
use steamwebapi::utils::as_chunks;
use steamwebapi::validation::MAX_BATCH_IDS;
use steamwebapi::{InventoryBatchRequest, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let ids = std::env::args()
        .skip(1)
        .map(|arg| SteamId::parse(&arg))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        anyhow::bail!("usage: inventory_value <steamid>...");
    }

    let client = Client::from_config(ClientConfig::from_env()?)?;

    for batch in as_chunks(ids, MAX_BATCH_IDS)? {
        let request = InventoryBatchRequest::builder()
            .steam_ids(batch)
            .game(Game::Cs2)
            .parse(true)
            .currency("USD")
            .build()?;

        for (owner, items) in client.steam().inventories(request).await? {
            let value: f64 = items.iter().map(InventoryItem::stack_value).sum();
            let tradable = items.iter().filter(|item| item.tradeable()).count();
            println!(
                "{owner}: {} items ({tradable} tradable), ~${value:.2}",
                items.len()
            );
        }
    }

    client.close().await?;
    Ok(())
}
