//! USD price resolution and the bottom-up balance merge.
//!
//! Two price sources cover partially-overlapping sets of assets:
//!
//! - the spot oracle prices registry-resolved (known) assets;
//! - the subgraph's daily aggregates price everything else by address.
//!
//! A known asset the oracle cannot price is *demoted*: reported back as an
//! unknown identity so the caller can route it through the daily-aggregate
//! query as well. Demotion is an explicit return value; the aggregation's
//! classification sets are never touched.

use anyhow::Result;
use bigdecimal::{BigDecimal, Zero};
use log::warn;
use rustc_hash::FxHashSet;

use crate::assets::{KnownToken, UnknownToken};
use crate::graph::{DayPricesQuery, PositionIndexer};
use crate::oracle::PriceOracle;
use crate::utils::{current_day_start, parse_decimal, to_checksum_address};

use super::fetcher::PAGE_SIZE;
use super::types::{AddressBalances, AssetPriceMap};

/// Spot-price every known asset through the oracle.
///
/// Returns the address-keyed price map plus the list of demoted identities:
/// assets the oracle priced at exactly zero. Demoted assets get no map entry.
pub async fn known_asset_prices<O: PriceOracle>(
    oracle: &O,
    known_assets: &FxHashSet<KnownToken>,
) -> Result<(AssetPriceMap, Vec<UnknownToken>)> {
    let mut prices = AssetPriceMap::default();
    let mut demoted = Vec::new();

    for token in known_assets {
        let price = oracle.find_usd_price(token).await?;

        if price.is_zero() {
            warn!(
                "No spot price for {}; falling back to daily aggregate pricing",
                token.symbol,
            );
            demoted.push(token.demote());
        } else {
            prices.insert(token.address.clone(), price);
        }
    }

    Ok((prices, demoted))
}

/// Price unknown assets from the subgraph's daily aggregates.
///
/// Queries the 00:00:00 UTC bucket of the current day for the whole set of
/// addresses, with the same fixed-page/stop-on-empty pagination as the
/// position fetch. Addresses absent from the result stay unpriced.
pub async fn unknown_asset_prices<I: PositionIndexer>(
    indexer: &I,
    unknown_assets: &FxHashSet<UnknownToken>,
) -> Result<AssetPriceMap> {
    let mut prices = AssetPriceMap::default();
    if unknown_assets.is_empty() {
        return Ok(prices);
    }

    let token_addresses: Vec<String> = unknown_assets
        .iter()
        .map(|token| token.address.to_lowercase())
        .collect();
    let day_start = current_day_start();

    let mut offset = 0;
    loop {
        let page = indexer
            .token_day_datas(&DayPricesQuery {
                limit: PAGE_SIZE,
                offset,
                token_addresses: token_addresses.clone(),
                day_start,
            })
            .await?;

        if page.is_empty() {
            break;
        }

        for row in &page {
            let address = to_checksum_address(&row.token.id)?;
            prices.insert(address, parse_decimal(&row.price_usd)?);
        }

        offset += PAGE_SIZE;
    }

    Ok(prices)
}

/// Merge resolved prices into the balance structure, bottom up.
///
/// Per leaf: known-map price wins over unknown-map price; with no entry the
/// zero default stands. A nonzero price sets the leaf's `usd_price` and
/// recomputes its `usd_value` from the amount, so repeated merges with the
/// same maps are idempotent. Each pool's own `usd_value` is then the sum of
/// its two legs, zero-priced legs included. No state crosses pools.
pub fn apply_prices(
    address_balances: &mut AddressBalances,
    known_prices: &AssetPriceMap,
    unknown_prices: &AssetPriceMap,
) {
    for pools in address_balances.values_mut() {
        for pool in pools.iter_mut() {
            let mut pool_usd_value = BigDecimal::zero();

            for leaf in pool.assets.iter_mut() {
                let address = leaf.asset.address();
                let price = known_prices
                    .get(address)
                    .or_else(|| unknown_prices.get(address));

                if let Some(price) = price {
                    if !price.is_zero() {
                        leaf.usd_price = price.clone();
                        leaf.user_balance.usd_value = &leaf.user_balance.amount * price;
                    }
                }

                pool_usd_value += leaf.user_balance.usd_value.clone();
            }

            pool.user_balance.usd_value = pool_usd_value;
        }
    }
}
