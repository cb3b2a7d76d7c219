//! # Release Registry Contract
//!
//! Validates and tracks payment-release requests for milestone-based escrow
//! funding. A requester opens a release, the configured oracle verifies it
//! and triggers the transfer out of escrow, and the recipient may amend or
//! cancel the release while it is still pending.
//!
//! | Phase        | Entry Point(s)                                         |
//! |--------------|--------------------------------------------------------|
//! | Bootstrap    | [`ReleaseRegistry::init`], `set_authority_contract`    |
//! | Governance   | `set_release_fee`                                      |
//! | Request      | [`ReleaseRegistry::request_release`]                   |
//! | Amendment    | `update_release`, `cancel_release`                     |
//! | Verification | [`ReleaseRegistry::verify_and_release`]                |
//! | Queries      | `get_release`, `get_release_update`, `get_project_releases`, `get_release_count`, `get_release_fee`, `get_authority`, `get_config` |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], field checks to
//! [`validation`], cross-contract calls to [`collaborators`] and event
//! emission to [`events`]. This file holds the entry points and the order
//! in which their preconditions are checked.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, token, Address, Bytes, Env, Vec,
};

pub mod collaborators;
pub mod events;
mod storage;
mod types;
pub mod validation;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use collaborators::{AuditLogClient, EscrowClient};
pub use storage::DEFAULT_RELEASE_FEE;
pub use types::{
    Currency, RegistryConfig, Release, ReleasePhase, ReleaseRequest, ReleaseUpdate,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized         = 100,
    InvalidProjectId      = 101,
    InvalidMilestoneId    = 102,
    InvalidAmount         = 103,
    AlreadyVerified       = 104,
    AlreadyReleased       = 106,
    InvalidRecipient      = 107,
    AuthorityNotSet       = 109,
    InvalidPenalty        = 110,
    InvalidInterest       = 111,
    InvalidStatus         = 113,
    MaxReleasesExceeded   = 114,
    InvalidContract       = 115,
    InvalidSignature      = 116,
    InvalidGracePeriod    = 117,
    InvalidLocation       = 118,
    InvalidCurrency       = 119,
    InvalidFee            = 120,
    NotFound              = 123,
    AuthorityAlreadySet   = 126,
    AlreadyInitialized    = 127,
    NotInitialized        = 128,
}

#[contract]
pub struct ReleaseRegistry;

#[contractimpl]
impl ReleaseRegistry {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Store the collaborator addresses and the registry capacity.
    ///
    /// Must be called exactly once after deployment. None of the configured
    /// addresses may be the placeholder account.
    pub fn init(env: Env, config: RegistryConfig) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        for address in [&config.escrow, &config.oracle, &config.logger, &config.fee_token] {
            if validation::is_placeholder(&env, address) {
                return Err(Error::InvalidContract);
            }
        }

        storage::save_config(&env, &config);
        events::emit_initialized(&env, &config);
        Ok(())
    }

    /// Set the governance authority. Can only happen once.
    ///
    /// The authority signs its own appointment; it later controls the fee
    /// and receives it on every release.
    pub fn set_authority_contract(env: Env, authority: Address) -> Result<(), Error> {
        authority.require_auth();

        validation::validate_recipient(&env, &authority)?;
        if storage::get_authority(&env).is_some() {
            return Err(Error::AuthorityAlreadySet);
        }

        storage::set_authority(&env, &authority);
        events::emit_authority_set(&env, &authority);
        Ok(())
    }

    /// Replace the fee charged to the oracle on each release.
    pub fn set_release_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        caller.require_auth();

        let authority = storage::get_authority(&env).ok_or(Error::AuthorityNotSet)?;
        if caller != authority {
            return Err(Error::NotAuthorized);
        }
        if new_fee < 0 {
            return Err(Error::InvalidFee);
        }

        storage::set_release_fee(&env, new_fee);
        events::emit_fee_updated(&env, &authority, new_fee);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Release lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a new pending release and return its ID.
    ///
    /// Capacity is checked first, then the request fields in order, and the
    /// authority last.
    pub fn request_release(
        env: Env,
        requester: Address,
        request: ReleaseRequest,
    ) -> Result<u64, Error> {
        requester.require_auth();

        let config = storage::load_config(&env).ok_or(Error::NotInitialized)?;
        if storage::get_release_count(&env) >= config.max_releases {
            return Err(Error::MaxReleasesExceeded);
        }
        let currency = validation::validate_request(&env, &request)?;
        if storage::get_authority(&env).is_none() {
            return Err(Error::AuthorityNotSet);
        }

        let id = storage::get_and_increment_release_id(&env);
        let release = Release {
            id,
            project_id: request.project_id,
            milestone_id: request.milestone_id,
            amount: request.amount,
            recipient: request.recipient,
            timestamp: env.ledger().sequence(),
            active: true,
            penalty_rate: request.penalty_rate,
            interest_rate: request.interest_rate,
            grace_period: request.grace_period,
            location: request.location,
            currency,
            verified: false,
            released: false,
        };

        storage::save_release(&env, &release);
        storage::push_project_release(&env, release.project_id, id);
        events::emit_release_requested(&env, &release, &requester);
        Ok(id)
    }

    /// Amend the amount and recipient of an unreleased record.
    ///
    /// Only the current recipient may amend. The amendment overwrites the
    /// record and replaces the previous entry in the update history.
    pub fn update_release(
        env: Env,
        caller: Address,
        id: u64,
        new_amount: i128,
        new_recipient: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut release = storage::load_release(&env, id).ok_or(Error::NotFound)?;
        if caller != release.recipient {
            return Err(Error::NotAuthorized);
        }
        validation::validate_amount(new_amount)?;
        validation::validate_recipient(&env, &new_recipient)?;
        if release.released {
            return Err(Error::AlreadyReleased);
        }

        let now = env.ledger().sequence();
        release.amount = new_amount;
        release.recipient = new_recipient.clone();
        release.timestamp = now;
        storage::save_release(&env, &release);
        storage::save_release_update(
            &env,
            id,
            &ReleaseUpdate {
                amount: new_amount,
                recipient: new_recipient,
                timestamp: now,
                updater: caller.clone(),
            },
        );

        events::emit_release_updated(&env, &release, &caller);
        Ok(())
    }

    /// Verify a pending release and pay it out.
    ///
    /// Only the configured oracle may call this, with a 65-byte signature.
    /// On success the escrow pays `amount` to the recipient, the oracle pays
    /// the release fee to the authority, the record is marked verified and
    /// released, and the audit log is notified, in that order.
    pub fn verify_and_release(
        env: Env,
        caller: Address,
        id: u64,
        signature: Bytes,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut release = storage::load_release(&env, id).ok_or(Error::NotFound)?;
        validation::validate_signature(&signature)?;
        let config = storage::load_config(&env).ok_or(Error::NotInitialized)?;
        if caller != config.oracle {
            return Err(Error::NotAuthorized);
        }
        if release.released {
            return Err(Error::AlreadyReleased);
        }
        if release.verified {
            return Err(Error::AlreadyVerified);
        }
        if !release.active {
            return Err(Error::InvalidStatus);
        }
        let authority = storage::get_authority(&env).ok_or(Error::AuthorityNotSet)?;
        let fee = storage::get_release_fee(&env);

        EscrowClient::new(&env, &config.escrow).transfer(
            &release.amount,
            &caller,
            &release.recipient,
        );

        if fee > 0 {
            token::Client::new(&env, &config.fee_token).transfer(&caller, &authority, &fee);
        }

        release.verified = true;
        release.released = true;
        release.timestamp = env.ledger().sequence();
        storage::save_release(&env, &release);

        AuditLogClient::new(&env, &config.logger).log_release(&id);

        events::emit_release_completed(&env, &release, &caller, fee);
        Ok(())
    }

    /// Cancel a pending release. Only the recipient may cancel, and never
    /// once the release has been verified.
    pub fn cancel_release(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut release = storage::load_release(&env, id).ok_or(Error::NotFound)?;
        if caller != release.recipient {
            return Err(Error::NotAuthorized);
        }
        if release.released {
            return Err(Error::AlreadyReleased);
        }
        if release.verified {
            return Err(Error::AlreadyVerified);
        }

        release.active = false;
        storage::save_release(&env, &release);

        events::emit_release_cancelled(&env, &release);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a release by its ID. Unknown IDs yield `None`.
    pub fn get_release(env: Env, id: u64) -> Option<Release> {
        storage::load_release(&env, id)
    }

    /// Latest amendment of a release, if it was ever updated.
    pub fn get_release_update(env: Env, id: u64) -> Option<ReleaseUpdate> {
        storage::load_release_update(&env, id)
    }

    /// Release IDs opened for `project_id`, oldest first.
    pub fn get_project_releases(env: Env, project_id: u64) -> Vec<u64> {
        storage::load_project_releases(&env, project_id)
    }

    /// Number of releases ever created, regardless of their phase.
    pub fn get_release_count(env: Env) -> u64 {
        storage::get_release_count(&env)
    }

    pub fn get_release_fee(env: Env) -> i128 {
        storage::get_release_fee(&env)
    }

    pub fn get_authority(env: Env) -> Option<Address> {
        storage::get_authority(&env)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, Error> {
        storage::load_config(&env).ok_or(Error::NotInitialized)
    }
}
