//! Utility functions for the lpfolio aggregator.
//!
//! This module is organized into focused submodules:
//!
//! - [`address`] - Ethereum address normalization (EIP-55 checksum, lowercase)
//! - [`decimal`] - BigDecimal parsing helpers
//! - [`time`] - UTC day bucketing for daily aggregate prices

mod address;
mod decimal;
mod time;

pub use address::{lowercase_addresses, to_checksum_address};
pub use decimal::parse_decimal;
pub use time::{current_day_start, utc_day_start};
