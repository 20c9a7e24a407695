use std::str::FromStr;

use anyhow::{Context, Result};
use bigdecimal::{BigDecimal, Zero};
use log::debug;
use serde_json::Value;
use url::Url;

use super::PriceOracle;
use crate::assets::KnownToken;

/// Spot prices from the CoinGecko `simple/price` endpoint.
///
/// Assets without a coingecko id, and ids CoinGecko does not know, resolve
/// to zero rather than an error.
#[derive(Debug, Clone)]
pub struct CoinGecko {
    http: reqwest::Client,
    base_url: Url,
}

impl CoinGecko {
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join drops the last path segment without a trailing slash
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url =
            Url::parse(&base).with_context(|| format!("Invalid oracle base url: {base_url}"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }
}

impl PriceOracle for CoinGecko {
    async fn find_usd_price(&self, token: &KnownToken) -> Result<BigDecimal> {
        let Some(id) = token.coingecko_id.as_deref() else {
            debug!("No oracle id for {}; treating as unpriced", token.symbol);
            return Ok(BigDecimal::zero());
        };

        let mut url = self
            .base_url
            .join("simple/price")
            .context("Failed to build oracle price url")?;
        url.query_pairs_mut()
            .append_pair("ids", id)
            .append_pair("vs_currencies", "usd");

        let response: Value = self
            .http
            .get(url)
            .send()
            .await
            .context("Price oracle request failed")?
            .error_for_status()
            .context("Price oracle returned an error status")?
            .json()
            .await
            .context("Price oracle returned a malformed payload")?;

        match response.get(id).and_then(|entry| entry.get("usd")) {
            Some(price) => BigDecimal::from_str(&price.to_string())
                .with_context(|| format!("Invalid oracle price for {id}: {price}")),
            // Unknown id on the oracle side is missing data, not a failure
            None => Ok(BigDecimal::zero()),
        }
    }
}
