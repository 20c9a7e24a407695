//! The balance pipeline, end to end.

use anyhow::Result;
use log::info;
use rustc_hash::FxHashSet;

use crate::assets::AssetRegistry;
use crate::graph::PositionIndexer;
use crate::oracle::PriceOracle;

use super::aggregator::aggregate;
use super::fetcher::fetch_positions;
use super::pricing::{apply_prices, known_asset_prices, unknown_asset_prices};
use super::types::AddressBalances;

/// Liquidity pool balance service over an indexer and a price oracle.
///
/// Stateless between calls: every [`get_balances`](Self::get_balances) run
/// re-fetches, re-classifies against the registry snapshot, and re-prices
/// from scratch.
pub struct PoolBalances<I, O> {
    indexer: I,
    oracle: O,
    registry: AssetRegistry,
    min_balance: String,
}

impl<I: PositionIndexer, O: PriceOracle> PoolBalances<I, O> {
    pub fn new(indexer: I, oracle: O, registry: AssetRegistry, min_balance: String) -> Self {
        Self {
            indexer,
            oracle,
            registry,
            min_balance,
        }
    }

    /// Resolve the full priced balance structure for `addresses`.
    ///
    /// Fetch, aggregate, price, merge. Assets the oracle demotes are added to
    /// the daily-aggregate query set alongside the registry-unknown ones, so
    /// a spot-price gap degrades to subgraph pricing instead of a zero value.
    pub async fn get_balances(&self, addresses: &[String]) -> Result<AddressBalances> {
        let positions = fetch_positions(&self.indexer, addresses, &self.min_balance).await?;
        info!(
            "Fetched {} liquidity positions for {} addresses",
            positions.len(),
            addresses.len(),
        );

        let protocol_balance = aggregate(positions, &self.registry)?;

        let (known_prices, demoted) =
            known_asset_prices(&self.oracle, &protocol_balance.known_assets).await?;

        let mut unpriced: FxHashSet<_> = protocol_balance.unknown_assets.clone();
        unpriced.extend(demoted);
        let unknown_prices = unknown_asset_prices(&self.indexer, &unpriced).await?;

        info!(
            "Resolved {} spot and {} daily-aggregate prices",
            known_prices.len(),
            unknown_prices.len(),
        );

        let mut address_balances = protocol_balance.address_balances;
        apply_prices(&mut address_balances, &known_prices, &unknown_prices);

        Ok(address_balances)
    }
}
