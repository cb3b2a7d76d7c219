//! Soroban RPC client — polls `getEvents` and decodes release registry events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied on transport errors, HTTP 429 and soft
//!   RPC errors, capped at [`MAX_BACKOFF_SECS`] seconds.
//! * Malformed requests and unknown methods ([`HARD_ERROR_CODES`]) are not
//!   retried; the poll fails and the indexer tries again on its next tick.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, RegistryEvent};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// JSON-RPC "invalid request" and "method not found".
const HARD_ERROR_CODES: [i64; 2] = [-32600, -32601];

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct RawEvent {
    /// XDR-decoded topic list
    pub topic: Vec<String>,
    /// XDR-decoded event value / data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

/// One page of `getEvents` output.
#[derive(Debug)]
pub struct EventsPage {
    pub events: Vec<RawEvent>,
    /// Opaque cursor to continue paginating from, if more events remain.
    pub cursor: Option<String>,
    pub latest_ledger: Option<u64>,
}

/// Doubling delay between retries of a single request.
struct Backoff {
    secs: u64,
}

impl Backoff {
    fn new() -> Self {
        Self {
            secs: INITIAL_BACKOFF_SECS,
        }
    }

    fn current(&self) -> u64 {
        self.secs
    }

    async fn wait(&mut self) {
        tokio::time::sleep(Duration::from_secs(self.secs)).await;
        self.secs = (self.secs * 2).min(MAX_BACKOFF_SECS);
    }
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events emitted by `contract_id`.
///
/// * `start_ledger` — the ledger sequence to scan from (inclusive); ignored
///   when `cursor` is given.
/// * `cursor`       — optional opaque pagination cursor from a previous page.
/// * `limit`        — maximum number of events to return.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<EventsPage> {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getEvents",
        "params": build_params(contract_id, start_ledger, cursor, limit),
    });
    let mut backoff = Backoff::new();

    loop {
        let resp = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, retry_in = backoff.current(), "RPC request failed");
                backoff.wait().await;
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(retry_in = backoff.current(), "Rate-limited by RPC");
            backoff.wait().await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            if HARD_ERROR_CODES.contains(&err.code) {
                return Err(IndexerError::Rpc(format!(
                    "hard error {}: {}",
                    err.code, err.message
                )));
            }
            warn!(
                code = err.code,
                message = %err.message,
                retry_in = backoff.current(),
                "RPC soft error"
            );
            backoff.wait().await;
            continue;
        }

        let result = body
            .result
            .ok_or_else(|| IndexerError::Rpc("Empty result from getEvents".to_string()))?;

        debug!(
            count = result.events.len(),
            latest_ledger = ?result.latest_ledger,
            "Fetched events"
        );

        return Ok(EventsPage {
            events: result.events,
            cursor: result.cursor,
            latest_ledger: result.latest_ledger,
        });
    }
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    // The RPC rejects requests carrying both a cursor and a start ledger.
    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Payload fields the indexer keeps from an event's data blob.
#[derive(Debug, Default, PartialEq, Eq)]
struct EventData {
    project_id: Option<String>,
    actor: Option<String>,
    amount: Option<String>,
}

/// Decode a list of raw RPC events into [`RegistryEvent`] structs.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<RegistryEvent> {
    raw.iter()
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<RegistryEvent> {
    // Extract leading topic symbol to determine event type.
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let release_id = if kind.is_release_scoped() {
        raw.topic.get(1).map(|t| extract_u64_or_raw(t))
    } else {
        None
    };

    let data = decode_data(&raw.value, &kind);

    Some(RegistryEvent {
        event_type: kind.as_str().to_string(),
        release_id,
        project_id: data.project_id,
        actor: data.actor,
        amount: data.amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Pull apart the JSON `value` blob that Soroban returns for event data.
/// The XDR is decoded by the RPC into a `{"type":…, …}` JSON object.
fn decode_data(value: &Value, kind: &EventKind) -> EventData {
    match kind {
        EventKind::RegistryInitialized => EventData {
            actor: extract_field(value, &["oracle"]).or_else(|| find_nested(value, "oracle")),
            ..EventData::default()
        },
        EventKind::AuthoritySet => EventData {
            actor: extract_field(value, &["authority"])
                .or_else(|| find_nested(value, "authority")),
            ..EventData::default()
        },
        EventKind::FeeUpdated => EventData {
            actor: extract_field(value, &["authority"]),
            amount: extract_field(value, &["fee"]),
            ..EventData::default()
        },
        EventKind::ReleaseRequested => EventData {
            project_id: extract_field(value, &["project_id"]),
            actor: extract_field(value, &["requester", "address"]),
            amount: extract_field(value, &["amount"]),
        },
        EventKind::ReleaseUpdated => EventData {
            project_id: extract_field(value, &["project_id"]),
            actor: extract_field(value, &["updater", "address"]),
            amount: extract_field(value, &["amount"]),
        },
        EventKind::ReleaseCompleted => EventData {
            project_id: extract_field(value, &["project_id"]),
            actor: extract_field(value, &["oracle", "address"]),
            amount: extract_field(value, &["amount"]),
        },
        EventKind::ReleaseCancelled => EventData {
            project_id: extract_field(value, &["project_id"]),
            actor: extract_field(value, &["recipient", "address"]),
            amount: None,
        },
        EventKind::Unknown => EventData::default(),
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(v) = value.get(key) {
            let s = match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => v.as_str().map(String::from),
            };
            if s.is_some() {
                return s;
            }
        }
    }
    None
}

fn find_nested(value: &Value, key: &str) -> Option<String> {
    if let Value::Object(map) = value {
        for (k, v) in map {
            if k == key {
                return v.as_str().map(String::from);
            }
            if let Some(found) = find_nested(v, key) {
                return Some(found);
            }
        }
    }
    None
}

/// Extract a Soroban Symbol from the XDR-decoded topic string.
/// The RPC may return `{"type":"symbol","value":"requested"}` or just the raw string.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Extract the release ID from a topic entry that might be a JSON object or raw number/string.
fn extract_u64_or_raw(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(n) = v.get("value").and_then(|x| x.as_u64()) {
            return n.to_string();
        }
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
