use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use super::{
    DayPricesQuery, LiquidityPosition, PositionIndexer, PositionsQuery, TokenDayData,
    LIQUIDITY_POSITIONS_QUERY, TOKEN_DAY_DATAS_QUERY,
};

/// GraphQL client for a Uniswap V2 style subgraph endpoint.
///
/// Errors are surfaced verbatim to the caller; there is no retry policy and
/// no partial-result handling at this layer.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid subgraph endpoint: {endpoint}"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Execute one GraphQL operation and extract `root` from the response
    /// `data` object.
    async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
        root: &str,
    ) -> Result<T> {
        let body = json!({
            "query": document,
            "variables": variables,
        });

        let response: Value = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .context("Subgraph request failed")?
            .error_for_status()
            .context("Subgraph returned an error status")?
            .json()
            .await
            .context("Subgraph returned a malformed payload")?;

        if let Some(errors) = response.get("errors") {
            return Err(anyhow!("Subgraph query failed: {errors}"));
        }

        let data = response
            .get("data")
            .and_then(|data| data.get(root))
            .ok_or_else(|| anyhow!("Subgraph response is missing `data.{root}`"))?;

        serde_json::from_value(data.clone())
            .with_context(|| format!("Failed to deserialize `data.{root}`"))
    }
}

impl PositionIndexer for GraphClient {
    async fn liquidity_positions(&self, query: &PositionsQuery) -> Result<Vec<LiquidityPosition>> {
        let variables = json!({
            "limit": query.limit,
            "offset": query.offset,
            "addresses": query.addresses,
            "balance": query.min_balance,
        });

        self.query(LIQUIDITY_POSITIONS_QUERY, variables, "liquidityPositions")
            .await
    }

    async fn token_day_datas(&self, query: &DayPricesQuery) -> Result<Vec<TokenDayData>> {
        let variables = json!({
            "limit": query.limit,
            "offset": query.offset,
            "tokenIds": query.token_addresses,
            "date": query.day_start,
        });

        self.query(TOKEN_DAY_DATAS_QUERY, variables, "tokenDayDatas")
            .await
    }
}
