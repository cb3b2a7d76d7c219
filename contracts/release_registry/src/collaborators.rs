//! Client interfaces of the contracts the registry calls into.
//!
//! Only the signatures matter here; `#[contractclient]` generates
//! [`EscrowClient`] and [`AuditLogClient`] for cross-contract invocation.
//! The fee itself moves through the standard `soroban_sdk::token::Client`.

use soroban_sdk::{contractclient, Address, Env};

/// Escrow contract holding milestone funds.
#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    /// Move `amount` of escrowed funds on behalf of `from` to `to`.
    fn transfer(env: Env, amount: i128, from: Address, to: Address);
}

/// Audit-log contract recording every completed release.
#[contractclient(name = "AuditLogClient")]
pub trait AuditLogInterface {
    fn log_release(env: Env, release_id: u64);
}
