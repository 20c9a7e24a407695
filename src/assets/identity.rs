use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A token resolved through the asset registry.
///
/// `symbol` is the registry key; `address`, `name` and `decimals` come from
/// the registry entry, not from the on-chain record that triggered the
/// lookup. `coingecko_id` links the asset to the spot-price oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KnownToken {
    pub symbol: String,
    pub address: String,
    pub name: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
}

impl KnownToken {
    /// Synthesize the equal-by-identity unknown counterpart of this token.
    ///
    /// Used when the spot-price oracle has no data: the asset falls back to
    /// daily-aggregate pricing alongside the genuinely unknown assets.
    pub fn demote(&self) -> UnknownToken {
        UnknownToken {
            identifier: self.symbol.clone(),
            address: self.address.clone(),
            name: Some(self.name.clone()),
            decimals: Some(self.decimals),
        }
    }
}

/// A token the registry could not resolve (missing symbol or an address
/// mismatch), or a known token demoted for lack of spot-price data.
///
/// Identity is `(identifier, address)` only; `name` and `decimals` are
/// display metadata and excluded from equality and hashing so the same token
/// reached through different construction paths collapses to one set entry.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct UnknownToken {
    pub identifier: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

impl UnknownToken {
    /// The symbol of an unknown token is always its identifier.
    pub fn symbol(&self) -> &str {
        &self.identifier
    }
}

impl PartialEq for UnknownToken {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.address == other.address
    }
}

impl Hash for UnknownToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.address.hash(state);
    }
}

/// Classification of one underlying pool token.
///
/// Closed over its two variants: cross-kind comparison is a compile error
/// rather than a runtime check, and every consumption site pattern-matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "classification", rename_all = "lowercase")]
pub enum AssetIdentity {
    Known(KnownToken),
    Unknown(UnknownToken),
}

impl AssetIdentity {
    /// The on-chain address of the token, checksummed.
    pub fn address(&self) -> &str {
        match self {
            AssetIdentity::Known(token) => &token.address,
            AssetIdentity::Unknown(token) => &token.address,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            AssetIdentity::Known(token) => &token.symbol,
            AssetIdentity::Unknown(token) => token.symbol(),
        }
    }
}
