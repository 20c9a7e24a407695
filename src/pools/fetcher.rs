//! Paginated download of raw liquidity positions.

use anyhow::Result;

use crate::graph::{LiquidityPosition, PositionIndexer, PositionsQuery};
use crate::utils::lowercase_addresses;

/// Fixed page size for all subgraph pagination.
pub const PAGE_SIZE: i64 = 1000;

/// Fetch every liquidity position for `addresses`.
///
/// Pages with a fixed size and a monotonically increasing offset until the
/// indexer returns an empty page; there is no maximum page count. Addresses
/// are lowercased once up front (the subgraph filter is case-sensitive) and
/// `min_balance` is forwarded untouched. Remote errors abort the fetch and
/// propagate verbatim.
pub async fn fetch_positions<I: PositionIndexer>(
    indexer: &I,
    addresses: &[String],
    min_balance: &str,
) -> Result<Vec<LiquidityPosition>> {
    let addresses = lowercase_addresses(addresses);

    let mut positions = Vec::new();
    let mut offset = 0;

    loop {
        let page = indexer
            .liquidity_positions(&PositionsQuery {
                limit: PAGE_SIZE,
                offset,
                addresses: addresses.clone(),
                min_balance: min_balance.to_string(),
            })
            .await?;

        if page.is_empty() {
            break;
        }

        positions.extend(page);
        offset += PAGE_SIZE;
    }

    Ok(positions)
}
