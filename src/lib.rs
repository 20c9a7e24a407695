pub mod assets;
pub mod config;
pub mod graph;
pub mod oracle;
pub mod pools;
pub mod utils;

pub use assets::{default_mainnet_registry, AssetIdentity, AssetRegistry};
pub use config::Settings;
pub use graph::{GraphClient, PositionIndexer};
pub use oracle::{CoinGecko, PriceOracle};
pub use pools::PoolBalances;
