//! Ethereum address normalization.
//!
//! The subgraph is case-sensitive on address filters and returns lowercase
//! ids, while balance maps are keyed by the EIP-55 checksummed form. These
//! helpers convert between the two representations.

use alloy::primitives::Address;
use anyhow::{Context, Result};

/// Normalize an address string to its EIP-55 checksummed form.
///
/// Accepts any hex casing with a 0x prefix.
pub fn to_checksum_address(address: &str) -> Result<String> {
    let parsed: Address = address
        .parse()
        .with_context(|| format!("Invalid ethereum address: {address}"))?;

    Ok(parsed.to_checksum(None))
}

/// Lowercase a list of addresses for use in subgraph query filters.
pub fn lowercase_addresses(addresses: &[String]) -> Vec<String> {
    addresses.iter().map(|a| a.to_lowercase()).collect()
}
