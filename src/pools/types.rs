use bigdecimal::{BigDecimal, Zero};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::assets::{AssetIdentity, KnownToken, UnknownToken};

/// Fixed metadata for a pool-type's LP share token.
#[derive(Debug, Clone, Copy)]
pub struct LpTokenMeta {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Uniswap V2 pair tokens all share the same ERC-20 metadata; only the
/// contract address distinguishes them.
pub const UNISWAP_V2_LP_TOKEN: LpTokenMeta = LpTokenMeta {
    name: "Uniswap V2",
    symbol: "UNI-V2",
    decimals: 18,
};

/// An amount together with its USD valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub amount: BigDecimal,
    pub usd_value: BigDecimal,
}

impl Balance {
    /// A balance whose USD value has not been resolved yet.
    pub fn from_amount(amount: BigDecimal) -> Self {
        Self {
            amount,
            usd_value: BigDecimal::zero(),
        }
    }
}

/// One underlying token's contribution to a pool for one address.
#[derive(Debug, Clone, Serialize)]
pub struct LiquidityPoolAsset {
    pub asset: AssetIdentity,
    /// Pool-wide reserve of this token, not the user's share.
    pub pool_reserve: BigDecimal,
    /// The user's proportional share of the reserve.
    pub user_balance: Balance,
    /// USD price per unit; zero until price resolution runs.
    pub usd_price: BigDecimal,
}

/// One pool position for one address.
#[derive(Debug, Clone, Serialize)]
pub struct LiquidityPool {
    /// The LP share token itself. Always synthesized as unknown: LP tokens
    /// are never registry-resolved.
    pub pool_token: UnknownToken,
    /// Exactly two entries for a constant-product pair.
    pub assets: Vec<LiquidityPoolAsset>,
    pub total_supply: BigDecimal,
    /// The user's LP-token balance and its USD value after the merge.
    pub user_balance: Balance,
}

/// Checksummed address -> pools, in page-arrival order.
pub type AddressBalances = FxHashMap<String, Vec<LiquidityPool>>;

/// Checksummed token address -> USD price.
pub type AssetPriceMap = FxHashMap<String, BigDecimal>;

/// Aggregation output: balances plus the asset classification side-channel.
///
/// The two sets are disjoint when aggregation finishes. Price resolution may
/// later report demotions (known assets without spot data) but never mutates
/// these sets; membership here reflects the registry snapshot only.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolBalance {
    pub address_balances: AddressBalances,
    pub known_assets: FxHashSet<KnownToken>,
    pub unknown_assets: FxHashSet<UnknownToken>,
}
