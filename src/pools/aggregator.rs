//! Balance reconstruction from raw position records.

use anyhow::{Context, Result};
use bigdecimal::Zero;
use log::{error, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::assets::{AssetIdentity, AssetRegistry, UnknownToken};
use crate::graph::LiquidityPosition;
use crate::utils::{parse_decimal, to_checksum_address};

use super::types::{
    AddressBalances, Balance, LiquidityPool, LiquidityPoolAsset, ProtocolBalance,
    UNISWAP_V2_LP_TOKEN,
};

/// Build the per-address balance structure from raw positions.
///
/// Each record contributes one [`LiquidityPool`] with exactly two underlying
/// asset legs, appended in page-arrival order. Both tokens are resolved
/// through the registry snapshot and routed into the known/unknown sets;
/// duplicates collapse by identity equality. USD fields stay zero here,
/// pricing is a later stage.
///
/// A record with a zero `totalSupply` cannot yield a share and is skipped
/// with a warning; the feed should never produce one. Malformed numeric
/// fields are a data error and abort the aggregation.
pub fn aggregate(
    positions: Vec<LiquidityPosition>,
    registry: &AssetRegistry,
) -> Result<ProtocolBalance> {
    let mut address_balances: AddressBalances = FxHashMap::default();
    let mut known_assets = FxHashSet::default();
    let mut unknown_assets = FxHashSet::default();

    for position in positions {
        let user_address = to_checksum_address(&position.user.id)?;
        let pool_address = to_checksum_address(&position.pair.id)?;

        let user_lp_balance = parse_decimal(&position.liquidity_token_balance)
            .with_context(|| format!("Bad LP balance in position for {user_address}"))?;
        let total_supply = parse_decimal(&position.pair.total_supply)
            .with_context(|| format!("Bad total supply for pool {pool_address}"))?;

        if total_supply.is_zero() {
            warn!("Pool {pool_address} reports zero total supply; skipping record");
            continue;
        }

        let pair = &position.pair;
        let mut pool_assets = Vec::with_capacity(2);

        for (token, reserve) in [(&pair.token0, &pair.reserve0), (&pair.token1, &pair.reserve1)] {
            let token_address = to_checksum_address(&token.id)?;
            let decimals: u8 = token
                .decimals
                .parse()
                .with_context(|| format!("Bad decimals for token {token_address}"))?;

            let asset = registry.resolve(
                &token.symbol,
                &token_address,
                Some(&token.name),
                Some(decimals),
            );

            match &asset {
                AssetIdentity::Known(token) => {
                    known_assets.insert(token.clone());
                },
                AssetIdentity::Unknown(token) => {
                    error!(
                        "Encountered unknown asset {} with address {} in pool {pool_address}",
                        token.identifier, token.address,
                    );
                    unknown_assets.insert(token.clone());
                },
            }

            let pool_reserve = parse_decimal(reserve)
                .with_context(|| format!("Bad reserve for token {token_address}"))?;

            // Proportional share of the reserve, exact decimal, no rounding
            let user_asset_balance = &user_lp_balance / &total_supply * &pool_reserve;

            pool_assets.push(LiquidityPoolAsset {
                asset,
                pool_reserve,
                user_balance: Balance::from_amount(user_asset_balance),
                usd_price: Zero::zero(),
            });
        }

        // The LP share token is never registry-resolved
        let pool_token = UnknownToken {
            identifier: UNISWAP_V2_LP_TOKEN.symbol.to_string(),
            address: pool_address,
            name: Some(UNISWAP_V2_LP_TOKEN.name.to_string()),
            decimals: Some(UNISWAP_V2_LP_TOKEN.decimals),
        };

        address_balances
            .entry(user_address)
            .or_default()
            .push(LiquidityPool {
                pool_token,
                assets: pool_assets,
                total_supply,
                user_balance: Balance::from_amount(user_lp_balance),
            });
    }

    Ok(ProtocolBalance {
        address_balances,
        known_assets,
        unknown_assets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::default_mainnet_registry;
    use crate::pools::testutil::{pair_token, position_with_tokens};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    const USER: &str = "0xfeb4acf3df3cdea7399794d0869ef76a6efaff52";
    const POOL: &str = "0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc";
    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn weth_usdc_position(lp_balance: &str, total_supply: &str) -> crate::graph::LiquidityPosition {
        position_with_tokens(
            USER,
            lp_balance,
            POOL,
            total_supply,
            (pair_token(USDC, "USDC", "USD Coin", "6"), "1000"),
            (pair_token(WETH, "WETH", "Wrapped Ether", "18"), "500"),
        )
    }

    #[test]
    fn test_proportional_share_arithmetic() {
        let registry = default_mainnet_registry();
        let balance = aggregate(vec![weth_usdc_position("10", "100")], &registry).unwrap();

        let user = to_checksum_address(USER).unwrap();
        let pools = &balance.address_balances[&user];
        assert_eq!(pools.len(), 1);

        let pool = &pools[0];
        assert_eq!(pool.assets.len(), 2);
        // 10 / 100 * 1000 = 100
        assert_eq!(pool.assets[0].user_balance.amount, dec("100"));
        // 10 / 100 * 500 = 50
        assert_eq!(pool.assets[1].user_balance.amount, dec("50"));
        // Pool-wide reserves are retained, not the user share
        assert_eq!(pool.assets[0].pool_reserve, dec("1000"));
        assert_eq!(pool.user_balance.amount, dec("10"));
        assert_eq!(pool.total_supply, dec("100"));
    }

    #[test]
    fn test_classification_routes_into_sets() {
        let registry = default_mainnet_registry();
        let record = position_with_tokens(
            USER,
            "1",
            POOL,
            "10",
            (pair_token(WETH, "WETH", "Wrapped Ether", "18"), "100"),
            (
                pair_token("0x3000000000000000000000000000000000000003", "FOO", "Foo", "18"),
                "200",
            ),
        );
        let balance = aggregate(vec![record], &registry).unwrap();

        assert_eq!(balance.known_assets.len(), 1);
        assert_eq!(balance.unknown_assets.len(), 1);
        assert!(balance.known_assets.iter().any(|t| t.symbol == "WETH"));
        assert!(balance.unknown_assets.iter().any(|t| t.identifier == "FOO"));
    }

    #[test]
    fn test_duplicate_assets_collapse() {
        let registry = default_mainnet_registry();
        let balance = aggregate(
            vec![weth_usdc_position("10", "100"), weth_usdc_position("5", "100")],
            &registry,
        )
        .unwrap();

        // Same pair twice: two pools, but each asset appears once in the sets
        let user = to_checksum_address(USER).unwrap();
        assert_eq!(balance.address_balances[&user].len(), 2);
        assert_eq!(balance.known_assets.len(), 2);
        assert!(balance.unknown_assets.is_empty());
    }

    #[test]
    fn test_arrival_order_preserved() {
        let registry = default_mainnet_registry();
        let balance = aggregate(
            vec![weth_usdc_position("7", "100"), weth_usdc_position("3", "100")],
            &registry,
        )
        .unwrap();

        let user = to_checksum_address(USER).unwrap();
        let pools = &balance.address_balances[&user];
        assert_eq!(pools[0].user_balance.amount, dec("7"));
        assert_eq!(pools[1].user_balance.amount, dec("3"));
    }

    #[test]
    fn test_lp_token_is_synthesized_unknown() {
        let registry = default_mainnet_registry();
        let balance = aggregate(vec![weth_usdc_position("10", "100")], &registry).unwrap();

        let user = to_checksum_address(USER).unwrap();
        let pool = &balance.address_balances[&user][0];
        assert_eq!(pool.pool_token.identifier, "UNI-V2");
        assert_eq!(pool.pool_token.name.as_deref(), Some("Uniswap V2"));
        assert_eq!(pool.pool_token.decimals, Some(18));
        assert_eq!(pool.pool_token.address, to_checksum_address(POOL).unwrap());
        // The LP token does not leak into the asset classification sets
        assert!(!balance.unknown_assets.contains(&pool.pool_token));
    }

    #[test]
    fn test_zero_total_supply_record_is_skipped() {
        let registry = default_mainnet_registry();
        let balance = aggregate(
            vec![weth_usdc_position("10", "0"), weth_usdc_position("10", "100")],
            &registry,
        )
        .unwrap();

        let user = to_checksum_address(USER).unwrap();
        assert_eq!(balance.address_balances[&user].len(), 1);
    }

    #[test]
    fn test_malformed_balance_is_a_data_error() {
        let registry = default_mainnet_registry();
        let result = aggregate(vec![weth_usdc_position("not-a-number", "100")], &registry);
        assert!(result.is_err());
    }

    #[test]
    fn test_addresses_are_checksummed() {
        let registry = default_mainnet_registry();
        let balance = aggregate(vec![weth_usdc_position("10", "100")], &registry).unwrap();

        let user = to_checksum_address(USER).unwrap();
        assert!(balance.address_balances.contains_key(&user));

        let pool = &balance.address_balances[&user][0];
        // Leaf addresses come back checksummed for price-map lookups
        assert_eq!(
            pool.assets[1].asset.address(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }
}
