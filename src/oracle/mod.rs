//! Spot-price oracle for registry-resolved assets.
//!
//! The oracle is injected into the pricing stage as an explicit dependency.
//! A zero price is the "no data" sentinel and triggers demotion to
//! daily-aggregate pricing; errors are reserved for transport failures.

mod coingecko;

pub use coingecko::CoinGecko;

use anyhow::Result;
use bigdecimal::BigDecimal;

use crate::assets::KnownToken;

pub trait PriceOracle {
    /// Current USD spot price for a known asset. Zero means no data.
    async fn find_usd_price(&self, token: &KnownToken) -> Result<BigDecimal>;
}
