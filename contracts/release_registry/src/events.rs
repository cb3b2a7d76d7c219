//! # Events
//!
//! Every successful state transition publishes one event. Release events
//! carry the release ID as the second topic so that off-chain consumers can
//! filter a single record's history without decoding the payload.
//!
//! | Topic                     | Payload               |
//! |---------------------------|-----------------------|
//! | `("init",)`               | [`RegistryInitialized`] |
//! | `("auth_set",)`           | [`AuthoritySet`]      |
//! | `("fee_set",)`            | [`FeeUpdated`]        |
//! | `("requested", id)`       | [`ReleaseRequested`]  |
//! | `("updated", id)`         | [`ReleaseUpdated`]    |
//! | `("released", id)`        | [`ReleaseCompleted`]  |
//! | `("cancelled", id)`       | [`ReleaseCancelled`]  |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{Currency, RegistryConfig, Release};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitialized {
    pub escrow: Address,
    pub oracle: Address,
    pub logger: Address,
    pub fee_token: Address,
    pub max_releases: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthoritySet {
    pub authority: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeUpdated {
    pub authority: Address,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseRequested {
    pub release_id: u64,
    pub project_id: u64,
    pub milestone_id: u64,
    pub requester: Address,
    pub recipient: Address,
    pub amount: i128,
    pub currency: Currency,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseUpdated {
    pub release_id: u64,
    pub project_id: u64,
    pub updater: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseCompleted {
    pub release_id: u64,
    pub project_id: u64,
    pub oracle: Address,
    pub recipient: Address,
    pub amount: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseCancelled {
    pub release_id: u64,
    pub project_id: u64,
    pub recipient: Address,
}

pub fn emit_initialized(env: &Env, config: &RegistryConfig) {
    env.events().publish(
        (symbol_short!("init"),),
        RegistryInitialized {
            escrow: config.escrow.clone(),
            oracle: config.oracle.clone(),
            logger: config.logger.clone(),
            fee_token: config.fee_token.clone(),
            max_releases: config.max_releases,
        },
    );
}

pub fn emit_authority_set(env: &Env, authority: &Address) {
    env.events().publish(
        (symbol_short!("auth_set"),),
        AuthoritySet {
            authority: authority.clone(),
        },
    );
}

pub fn emit_fee_updated(env: &Env, authority: &Address, fee: i128) {
    env.events().publish(
        (symbol_short!("fee_set"),),
        FeeUpdated {
            authority: authority.clone(),
            fee,
        },
    );
}

pub fn emit_release_requested(env: &Env, release: &Release, requester: &Address) {
    env.events().publish(
        (symbol_short!("requested"), release.id),
        ReleaseRequested {
            release_id: release.id,
            project_id: release.project_id,
            milestone_id: release.milestone_id,
            requester: requester.clone(),
            recipient: release.recipient.clone(),
            amount: release.amount,
            currency: release.currency,
        },
    );
}

pub fn emit_release_updated(env: &Env, release: &Release, updater: &Address) {
    env.events().publish(
        (symbol_short!("updated"), release.id),
        ReleaseUpdated {
            release_id: release.id,
            project_id: release.project_id,
            updater: updater.clone(),
            recipient: release.recipient.clone(),
            amount: release.amount,
        },
    );
}

pub fn emit_release_completed(env: &Env, release: &Release, oracle: &Address, fee: i128) {
    env.events().publish(
        (symbol_short!("released"), release.id),
        ReleaseCompleted {
            release_id: release.id,
            project_id: release.project_id,
            oracle: oracle.clone(),
            recipient: release.recipient.clone(),
            amount: release.amount,
            fee,
        },
    );
}

pub fn emit_release_cancelled(env: &Env, release: &Release) {
    env.events().publish(
        (symbol_short!("cancelled"), release.id),
        ReleaseCancelled {
            release_id: release.id,
            project_id: release.project_id,
            recipient: release.recipient.clone(),
        },
    );
}
