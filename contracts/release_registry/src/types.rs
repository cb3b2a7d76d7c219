//! # Types
//!
//! Shared data structures used across all modules of the release registry.
//!
//! ## Release lifecycle
//!
//! A [`Release`] carries three flags (`active`, `verified`, `released`)
//! rather than a single status enum, so that the stored record keeps the
//! full history of what happened to it. [`Release::phase`] folds the flags
//! into a [`ReleasePhase`]:
//!
//! ```text
//! Pending ──► Released      (verify_and_release)
//!    └──────► Cancelled     (cancel_release)
//! ```
//!
//! `Released` is terminal. A cancelled record can still be amended by its
//! recipient because only the `released` flag blocks `update_release`.

use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

/// Settlement currency of a release.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    /// Parse the ticker symbol supplied by the requester.
    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        if *symbol == symbol_short!("STX") {
            Some(Self::Stx)
        } else if *symbol == symbol_short!("USD") {
            Some(Self::Usd)
        } else if *symbol == symbol_short!("BTC") {
            Some(Self::Btc)
        } else {
            None
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Self::Stx => symbol_short!("STX"),
            Self::Usd => symbol_short!("USD"),
            Self::Btc => symbol_short!("BTC"),
        }
    }
}

/// Fields supplied by the requester when opening a release.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseRequest {
    pub project_id: u64,
    pub milestone_id: u64,
    /// Amount in the smallest unit of `currency`.
    pub amount: i128,
    pub recipient: Address,
    /// Percentage, 0–100.
    pub penalty_rate: u32,
    /// Percentage, 0–20.
    pub interest_rate: u32,
    /// Time units, 0–30.
    pub grace_period: u32,
    /// Human-readable site of the milestone, 1–100 bytes.
    pub location: String,
    /// Ticker symbol: `STX`, `USD` or `BTC`.
    pub currency: Symbol,
}

/// On-chain release record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Release {
    /// Unique identifier (auto-incremented).
    pub id: u64,
    pub project_id: u64,
    pub milestone_id: u64,
    pub amount: i128,
    /// Address paid on release; the only address allowed to update or cancel.
    pub recipient: Address,
    /// Ledger sequence at creation or last mutation.
    pub timestamp: u32,
    /// `false` once the recipient has cancelled the release.
    pub active: bool,
    pub penalty_rate: u32,
    pub interest_rate: u32,
    pub grace_period: u32,
    pub location: String,
    pub currency: Currency,
    pub verified: bool,
    pub released: bool,
}

/// Lifecycle phase derived from a record's flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReleasePhase {
    Pending,
    Released,
    Cancelled,
}

impl Release {
    pub fn phase(&self) -> ReleasePhase {
        if self.released {
            ReleasePhase::Released
        } else if !self.active {
            ReleasePhase::Cancelled
        } else {
            ReleasePhase::Pending
        }
    }
}

/// Most recent amendment applied to a release. Only one is kept per record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseUpdate {
    pub amount: i128,
    pub recipient: Address,
    pub timestamp: u32,
    pub updater: Address,
}

/// Collaborator addresses and capacity, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Escrow contract holding the milestone funds.
    pub escrow: Address,
    /// The only address allowed to call `verify_and_release`.
    pub oracle: Address,
    /// Audit-log contract notified of every release.
    pub logger: Address,
    /// Token used to pay the release fee to the authority.
    pub fee_token: Address,
    /// Maximum number of releases the registry will ever hold.
    pub max_releases: u64,
}
