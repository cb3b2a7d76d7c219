//! Application configuration loaded from environment variables.

use crate::errors::{IndexerError, Result};

/// Upper bound the Soroban RPC accepts for `pagination.limit`.
const MAX_EVENTS_PER_PAGE: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// The release registry contract address (Strkey format)
    pub contract_id: String,
    /// Path to the SQLite database file
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; missing optional keys fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contract_id = lookup("CONTRACT_ID").ok_or_else(|| {
            IndexerError::Config("CONTRACT_ID environment variable is required".to_string())
        })?;

        let config = Config {
            rpc_url: lookup("RPC_URL")
                .unwrap_or_else(|| "https://soroban-testnet.stellar.org".to_string()),
            contract_id,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:./release_events.db".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 3001)?,
            poll_interval_secs: parse_or(&lookup, "POLL_INTERVAL_SECS", 5)?,
            events_per_page: parse_or(&lookup, "EVENTS_PER_PAGE", 100)?,
            start_ledger: parse_or(&lookup, "START_LEDGER", 0)?,
        };

        if config.events_per_page == 0 || config.events_per_page > MAX_EVENTS_PER_PAGE {
            return Err(IndexerError::Config(format!(
                "EVENTS_PER_PAGE must be between 1 and {MAX_EVENTS_PER_PAGE}"
            )));
        }
        if config.poll_interval_secs == 0 {
            return Err(IndexerError::Config(
                "POLL_INTERVAL_SECS must be positive".to_string(),
            ));
        }
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| IndexerError::Config(format!("Invalid {key}"))),
        None => Ok(default),
    }
}
