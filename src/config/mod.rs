pub mod config;

pub use config::{GraphSettings, OracleSettings, Settings};
