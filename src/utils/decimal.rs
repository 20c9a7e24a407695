//! BigDecimal parsing helpers.
//!
//! Balance and price fields arrive from the subgraph as decimal strings.
//! Parsing keeps exact precision; a malformed field is a data error from the
//! feed and is propagated rather than silently zeroed.

use std::str::FromStr;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;

/// Parse a decimal string field from a subgraph payload.
pub fn parse_decimal(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value).with_context(|| format!("Invalid decimal value: {value}"))
}
