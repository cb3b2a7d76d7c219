//! Canonical event types emitted by the release registry contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/release_registry/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the release registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Collaborators and capacity were configured (`init` topic).
    RegistryInitialized,
    /// The governance authority was appointed (`auth_set` topic).
    AuthoritySet,
    /// The release fee changed (`fee_set` topic).
    FeeUpdated,
    /// A new release was opened (`requested` topic).
    ReleaseRequested,
    /// The recipient amended a release (`updated` topic).
    ReleaseUpdated,
    /// The oracle verified a release and funds moved (`released` topic).
    ReleaseCompleted,
    /// The recipient cancelled a release (`cancelled` topic).
    ReleaseCancelled,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "init" => Self::RegistryInitialized,
            "auth_set" => Self::AuthoritySet,
            "fee_set" => Self::FeeUpdated,
            "requested" => Self::ReleaseRequested,
            "updated" => Self::ReleaseUpdated,
            "released" => Self::ReleaseCompleted,
            "cancelled" => Self::ReleaseCancelled,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegistryInitialized => "registry_initialized",
            Self::AuthoritySet => "authority_set",
            Self::FeeUpdated => "fee_updated",
            Self::ReleaseRequested => "release_requested",
            Self::ReleaseUpdated => "release_updated",
            Self::ReleaseCompleted => "release_completed",
            Self::ReleaseCancelled => "release_cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the second topic of this event is a release ID.
    pub fn is_release_scoped(&self) -> bool {
        matches!(
            self,
            Self::ReleaseRequested
                | Self::ReleaseUpdated
                | Self::ReleaseCompleted
                | Self::ReleaseCancelled
        )
    }
}

/// A fully decoded registry event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    pub event_type: String,
    pub release_id: Option<String>,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub release_id: Option<String>,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
