use rustc_hash::FxHashMap;

use super::{AssetIdentity, KnownToken, UnknownToken};

/// Canonical registry data for one symbol.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// Checksummed mainnet address the symbol is registered to.
    pub address: String,
    pub name: String,
    pub decimals: u8,
    /// Oracle identifier for spot-price lookups.
    pub coingecko_id: Option<String>,
}

/// Immutable symbol -> entry snapshot used for asset resolution.
///
/// The snapshot is the only state shared across a run and is never mutated
/// while an aggregation is in flight.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    entries: FxHashMap<String, RegistryEntry>,
}

impl AssetRegistry {
    pub fn new(entries: impl IntoIterator<Item = (String, RegistryEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup_by_symbol(&self, symbol: &str) -> Option<&RegistryEntry> {
        self.entries.get(symbol)
    }

    /// Classify a token observed on-chain.
    ///
    /// A registry hit whose registered address matches `address`
    /// (case-insensitive) yields a [`KnownToken`] built from the registry
    /// entry. A miss, or a hit with a different address (symbol squatting),
    /// yields an [`UnknownToken`] carrying the observed metadata. Absence is
    /// a valid outcome, never an error.
    pub fn resolve(
        &self,
        symbol: &str,
        address: &str,
        name: Option<&str>,
        decimals: Option<u8>,
    ) -> AssetIdentity {
        match self.entries.get(symbol) {
            Some(entry) if entry.address.eq_ignore_ascii_case(address) => {
                AssetIdentity::Known(KnownToken {
                    symbol: symbol.to_string(),
                    address: entry.address.clone(),
                    name: entry.name.clone(),
                    decimals: entry.decimals,
                    coingecko_id: entry.coingecko_id.clone(),
                })
            },
            _ => AssetIdentity::Unknown(UnknownToken {
                identifier: symbol.to_string(),
                address: address.to_string(),
                name: name.map(str::to_string),
                decimals,
            }),
        }
    }
}

/// Built-in snapshot of the major mainnet tokens.
///
/// Enough for the binary to run without external data files; callers with a
/// fuller registry construct [`AssetRegistry`] themselves.
pub fn default_mainnet_registry() -> AssetRegistry {
    let entry = |address: &str, name: &str, decimals: u8, coingecko_id: &str| RegistryEntry {
        address: address.to_string(),
        name: name.to_string(),
        decimals,
        coingecko_id: Some(coingecko_id.to_string()),
    };

    AssetRegistry::new([
        (
            "WETH".to_string(),
            entry("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "Wrapped Ether", 18, "weth"),
        ),
        (
            "USDC".to_string(),
            entry("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USD Coin", 6, "usd-coin"),
        ),
        (
            "USDT".to_string(),
            entry("0xdAC17F958D2ee523a2206206994597C13D831ec7", "Tether USD", 6, "tether"),
        ),
        (
            "DAI".to_string(),
            entry("0x6B175474E89094C44Da98b954EedeAC495271d0F", "Dai Stablecoin", 18, "dai"),
        ),
        (
            "WBTC".to_string(),
            entry("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", "Wrapped BTC", 8, "wrapped-bitcoin"),
        ),
        (
            "UNI".to_string(),
            entry("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984", "Uniswap", 18, "uniswap"),
        ),
        (
            "LINK".to_string(),
            entry("0x514910771AF9Ca656af840dff83E8264EcF986CA", "ChainLink Token", 18, "chainlink"),
        ),
        (
            "AAVE".to_string(),
            entry("0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9", "Aave Token", 18, "aave"),
        ),
    ])
}
