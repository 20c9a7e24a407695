//! In-memory indexer and oracle doubles shared by the pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use bigdecimal::{BigDecimal, Zero};
use rustc_hash::FxHashMap;

use crate::assets::KnownToken;
use crate::graph::{
    DayPricesQuery, LiquidityPosition, Pair, PairToken, PositionIndexer, PositionUser,
    PositionsQuery, TokenDayData, TokenRef,
};
use crate::oracle::PriceOracle;

pub fn pair_token(id: &str, symbol: &str, name: &str, decimals: &str) -> PairToken {
    PairToken {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals: decimals.to_string(),
    }
}

/// A position over two placeholder tokens; enough for pagination tests.
pub fn position(
    user: &str,
    lp_balance: &str,
    pool: &str,
    total_supply: &str,
) -> LiquidityPosition {
    position_with_tokens(
        user,
        lp_balance,
        pool,
        total_supply,
        (
            pair_token("0x1000000000000000000000000000000000000001", "TK0", "Token Zero", "18"),
            "0",
        ),
        (
            pair_token("0x1000000000000000000000000000000000000002", "TK1", "Token One", "18"),
            "0",
        ),
    )
}

pub fn position_with_tokens(
    user: &str,
    lp_balance: &str,
    pool: &str,
    total_supply: &str,
    token0: (PairToken, &str),
    token1: (PairToken, &str),
) -> LiquidityPosition {
    LiquidityPosition {
        liquidity_token_balance: lp_balance.to_string(),
        pair: Pair {
            id: pool.to_string(),
            reserve0: token0.1.to_string(),
            reserve1: token1.1.to_string(),
            total_supply: total_supply.to_string(),
            token0: token0.0,
            token1: token1.0,
        },
        user: PositionUser {
            id: user.to_string(),
        },
    }
}

pub fn day_price(token_address: &str, price_usd: &str) -> TokenDayData {
    TokenDayData {
        date: 0,
        token: TokenRef {
            id: token_address.to_string(),
        },
        price_usd: price_usd.to_string(),
    }
}

/// Indexer double serving preset pages and recording every query it sees.
#[derive(Default)]
pub struct MockIndexer {
    fail: bool,
    position_pages: Mutex<VecDeque<Vec<LiquidityPosition>>>,
    day_price_pages: Mutex<VecDeque<Vec<TokenDayData>>>,
    position_queries: Mutex<Vec<PositionsQuery>>,
    day_price_queries: Mutex<Vec<DayPricesQuery>>,
}

impl MockIndexer {
    pub fn with_position_pages(pages: Vec<Vec<LiquidityPosition>>) -> Self {
        Self {
            position_pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    pub fn with_day_price_pages(pages: Vec<Vec<TokenDayData>>) -> Self {
        Self {
            day_price_pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    pub fn with_pages(
        position_pages: Vec<Vec<LiquidityPosition>>,
        day_price_pages: Vec<Vec<TokenDayData>>,
    ) -> Self {
        Self {
            position_pages: Mutex::new(position_pages.into()),
            day_price_pages: Mutex::new(day_price_pages.into()),
            ..Self::default()
        }
    }

    /// An indexer whose every query fails with a remote error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn position_queries(&self) -> Vec<PositionsQuery> {
        self.position_queries.lock().unwrap().clone()
    }

    pub fn day_price_queries(&self) -> Vec<DayPricesQuery> {
        self.day_price_queries.lock().unwrap().clone()
    }
}

impl PositionIndexer for MockIndexer {
    async fn liquidity_positions(&self, query: &PositionsQuery) -> Result<Vec<LiquidityPosition>> {
        if self.fail {
            return Err(anyhow!("indexer unreachable"));
        }
        self.position_queries.lock().unwrap().push(query.clone());
        Ok(self
            .position_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn token_day_datas(&self, query: &DayPricesQuery) -> Result<Vec<TokenDayData>> {
        if self.fail {
            return Err(anyhow!("indexer unreachable"));
        }
        self.day_price_queries.lock().unwrap().push(query.clone());
        Ok(self
            .day_price_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// Oracle double returning preset per-symbol prices; unlisted symbols price
/// at zero, matching the oracle's "no data" sentinel.
#[derive(Default)]
pub struct MockOracle {
    prices: FxHashMap<String, BigDecimal>,
}

impl MockOracle {
    pub fn with_prices(prices: impl IntoIterator<Item = (&'static str, BigDecimal)>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(symbol, price)| (symbol.to_string(), price))
                .collect(),
        }
    }
}

impl PriceOracle for MockOracle {
    async fn find_usd_price(&self, token: &KnownToken) -> Result<BigDecimal> {
        Ok(self
            .prices
            .get(&token.symbol)
            .cloned()
            .unwrap_or_else(BigDecimal::zero))
    }
}
