//! Subgraph access layer.
//!
//! The aggregation pipeline consumes the indexer through the
//! [`PositionIndexer`] capability: two page-level queries whose pagination is
//! driven by the caller. [`GraphClient`] is the concrete GraphQL transport;
//! tests substitute an in-memory implementation.

mod client;
mod models;
mod queries;

pub use client::GraphClient;
pub use models::{LiquidityPosition, Pair, PairToken, PositionUser, TokenDayData, TokenRef};
pub use queries::{LIQUIDITY_POSITIONS_QUERY, TOKEN_DAY_DATAS_QUERY};

use anyhow::Result;

/// One page request for liquidity positions.
///
/// Addresses must already be lowercased; the subgraph filter is
/// case-sensitive. `min_balance` is passed through to the
/// `liquidityTokenBalance_gt` filter untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsQuery {
    pub limit: i64,
    pub offset: i64,
    pub addresses: Vec<String>,
    pub min_balance: String,
}

/// One page request for daily aggregate token prices.
///
/// `day_start` is the unix timestamp of 00:00:00 UTC for the day being
/// queried; the subgraph records exactly one price row per token per day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPricesQuery {
    pub limit: i64,
    pub offset: i64,
    pub token_addresses: Vec<String>,
    pub day_start: i64,
}

/// Page-level access to the position indexer.
///
/// Implementations return a single page per call and surface remote errors
/// verbatim; they never retry and never interpret the filters they carry.
pub trait PositionIndexer {
    async fn liquidity_positions(&self, query: &PositionsQuery) -> Result<Vec<LiquidityPosition>>;

    async fn token_day_datas(&self, query: &DayPricesQuery) -> Result<Vec<TokenDayData>>;
}
