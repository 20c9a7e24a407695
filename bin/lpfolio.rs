use anyhow::{bail, Context};
use jemallocator::Jemalloc;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use lpfolio::{default_mainnet_registry, CoinGecko, GraphClient, PoolBalances, Settings};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    // Load configuration
    let settings =
        Settings::new().context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    if settings.addresses.is_empty() {
        bail!("No addresses configured; nothing to aggregate");
    }

    let indexer = GraphClient::new(&settings.graph.uniswap_v2_url)
        .context("Failed to initialize subgraph client")?;
    let oracle = CoinGecko::new(&settings.oracle.coingecko_url)
        .context("Failed to initialize price oracle")?;

    let service = PoolBalances::new(
        indexer,
        oracle,
        default_mainnet_registry(),
        settings.min_balance.clone(),
    );

    info!(
        "Aggregating liquidity pool balances for {} addresses",
        settings.addresses.len()
    );

    let balances = service.get_balances(&settings.addresses).await?;

    info!("Aggregation finished for {} addresses with positions", balances.len());

    println!("{}", serde_json::to_string_pretty(&balances)?);

    Ok(())
}
