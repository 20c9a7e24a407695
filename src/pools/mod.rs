//! Liquidity-pool position aggregation pipeline.
//!
//! Stages run strictly in sequence per aggregation run:
//!
//! 1. [`fetcher`] - paginated position download from the subgraph
//! 2. [`aggregator`] - per-address, per-asset balance reconstruction
//! 3. [`pricing`] - spot + daily-aggregate USD price resolution
//! 4. [`pricing::apply_prices`] - bottom-up USD merge into the balances
//!
//! [`PoolBalances`] wires the stages together behind injected indexer and
//! oracle capabilities.

pub mod aggregator;
pub mod fetcher;
pub mod pricing;
mod service;
mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use service::PoolBalances;
pub use types::{
    AddressBalances, AssetPriceMap, Balance, LiquidityPool, LiquidityPoolAsset, LpTokenMeta,
    ProtocolBalance, UNISWAP_V2_LP_TOKEN,
};
