use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Subgraph indexer endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphSettings {
    /// Uniswap V2 subgraph GraphQL endpoint.
    pub uniswap_v2_url: String,
}

/// Spot price oracle configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct OracleSettings {
    #[serde(default = "default_coingecko_url")]
    pub coingecko_url: String,
}

fn default_coingecko_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub graph: GraphSettings,
    pub oracle: OracleSettings,
    /// Addresses whose positions are aggregated; any casing is accepted.
    pub addresses: Vec<String>,
    /// Minimum LP-token balance filter forwarded to the subgraph.
    #[serde(default = "default_min_balance")]
    pub min_balance: String,
}

fn default_min_balance() -> String {
    "0".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
