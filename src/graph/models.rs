//! Wire models for subgraph responses.
//!
//! Numeric fields arrive as decimal strings and are kept as strings here;
//! parsing into `BigDecimal` happens in the aggregation layer where a
//! malformed value can be reported with record context.

use serde::Deserialize;

/// One raw liquidity position record: a user's LP-token balance in one pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPosition {
    pub liquidity_token_balance: String,
    pub pair: Pair,
    pub user: PositionUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionUser {
    /// Lowercase user address.
    pub id: String,
}

/// Pool-level state for a two-asset constant-product pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    /// Lowercase pair contract address.
    pub id: String,
    pub reserve0: String,
    pub reserve1: String,
    pub total_supply: String,
    pub token0: PairToken,
    pub token1: PairToken,
}

/// Token descriptor nested inside a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairToken {
    /// Lowercase token contract address.
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// The subgraph serializes decimals as a BigInt string.
    pub decimals: String,
}

/// One daily aggregate price row.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDayData {
    pub date: i64,
    pub token: TokenRef,
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenRef {
    /// Lowercase token contract address.
    pub id: String,
}
