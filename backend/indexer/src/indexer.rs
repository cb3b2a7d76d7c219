//! Long-running background task that polls the Soroban RPC and writes
//! decoded release registry events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Where the next poll starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    ledger: u32,
    cursor: Option<String>,
}

/// Run the indexer loop forever; intended to be spawned as a [`tokio`] task.
pub async fn run(state: Arc<IndexerState>) {
    info!(contract = %state.config.contract_id, "Indexer starting");

    let mut position = resume_position(&state.pool, state.config.start_ledger).await;
    info!(ledger = position.ledger, cursor = ?position.cursor, "Resuming");

    let interval = Duration::from_secs(state.config.poll_interval_secs);
    loop {
        match poll_once(&state.pool, &state.client, &state.config, &position).await {
            Ok(next) => position = next,
            Err(e) => error!(error = %e, "Indexer poll error"),
        }

        tokio::time::sleep(interval).await;
    }
}

/// Load the persisted cursor, falling back to `start_ledger` on a fresh database.
async fn resume_position(pool: &SqlitePool, start_ledger: u32) -> Position {
    let last_ledger = db::get_last_ledger(pool).await.unwrap_or_else(|e| {
        warn!(error = %e, start_ledger, "Failed to read last ledger, starting over");
        0
    });
    let cursor = db::get_cursor_string(pool).await.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to read pagination cursor, dropping it");
        None
    });

    Position {
        ledger: if last_ledger > 0 {
            last_ledger as u32
        } else {
            start_ledger
        },
        cursor,
    }
}

/// Perform a single poll iteration and return the position for the next one.
async fn poll_once(
    pool: &SqlitePool,
    client: &Client,
    config: &Config,
    position: &Position,
) -> Result<Position> {
    let page = rpc::fetch_events(
        client,
        &config.rpc_url,
        &config.contract_id,
        position.ledger,
        position.cursor.as_deref(),
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(pool, &decoded).await?;
        info!(
            raw = page.events.len(),
            stored = inserted,
            "Polled registry events"
        );
    }

    let next = next_position(position.ledger, page.cursor, page.latest_ledger);

    // Persist cursor so restarts are deterministic.
    db::save_cursor(pool, next.ledger as i64, next.cursor.as_deref()).await?;

    Ok(next)
}

/// The ledger never moves backwards; a returned cursor keeps paginating
/// within the range already requested.
fn next_position(start_ledger: u32, cursor: Option<String>, latest_ledger: Option<u64>) -> Position {
    let ledger = latest_ledger
        .map(|l| (l as u32).max(start_ledger))
        .unwrap_or(start_ledger);
    Position { ledger, cursor }
}
