//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the registry.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type             | Description                           |
//! |----------------|------------------|---------------------------------------|
//! | `Config`       | `RegistryConfig` | Collaborators and capacity            |
//! | `Authority`    | `Address`        | Set-once governance address           |
//! | `ReleaseFee`   | `i128`           | Fee paid to the authority per release |
//! | `ReleaseCount` | `u64`            | Auto-increment release ID counter     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type            | Description                     |
//! |-----------------------|-----------------|---------------------------------|
//! | `Release(id)`         | `Release`       | The release record              |
//! | `ReleaseUpdate(id)`   | `ReleaseUpdate` | Latest amendment of the record  |
//! | `ProjectReleases(id)` | `Vec<u64>`      | Release IDs of a project        |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{RegistryConfig, Release, ReleaseUpdate};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Fee charged on each release until the authority sets another one.
pub const DEFAULT_RELEASE_FEE: i128 = 500;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Registry configuration (Instance).
    Config,
    /// Governance address (Instance).
    Authority,
    /// Per-release fee (Instance).
    ReleaseFee,
    /// Next release ID, equal to the number of releases created (Instance).
    ReleaseCount,
    /// Release record keyed by ID (Persistent).
    Release(u64),
    /// Latest amendment keyed by release ID (Persistent).
    ReleaseUpdate(u64),
    /// Release IDs keyed by project ID (Persistent).
    ProjectReleases(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Returns `None` until `init` has run.
pub fn load_config(env: &Env) -> Option<RegistryConfig> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Config)
}

pub fn get_authority(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Authority)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
    bump_instance(env);
}

pub fn get_release_fee(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ReleaseFee)
        .unwrap_or(DEFAULT_RELEASE_FEE)
}

pub fn set_release_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::ReleaseFee, &fee);
    bump_instance(env);
}

pub fn get_release_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ReleaseCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the release counter.
/// Returns the ID to use for the *current* release (pre-increment value).
pub fn get_and_increment_release_id(env: &Env) -> u64 {
    let current = get_release_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ReleaseCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_release(env: &Env, release: &Release) {
    let key = DataKey::Release(release.id);
    env.storage().persistent().set(&key, release);
    bump_persistent(env, &key);
}

pub fn load_release(env: &Env, id: u64) -> Option<Release> {
    let key = DataKey::Release(id);
    let release: Option<Release> = env.storage().persistent().get(&key);
    if release.is_some() {
        bump_persistent(env, &key);
    }
    release
}

/// Replace the amendment slot of a release.
pub fn save_release_update(env: &Env, id: u64, update: &ReleaseUpdate) {
    let key = DataKey::ReleaseUpdate(id);
    env.storage().persistent().set(&key, update);
    bump_persistent(env, &key);
}

pub fn load_release_update(env: &Env, id: u64) -> Option<ReleaseUpdate> {
    let key = DataKey::ReleaseUpdate(id);
    let update: Option<ReleaseUpdate> = env.storage().persistent().get(&key);
    if update.is_some() {
        bump_persistent(env, &key);
    }
    update
}

/// Append `release_id` to the project's index.
pub fn push_project_release(env: &Env, project_id: u64, release_id: u64) {
    let key = DataKey::ProjectReleases(project_id);
    let mut ids = load_project_releases(env, project_id);
    ids.push_back(release_id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}

/// Release IDs of a project in creation order; empty for unknown projects.
pub fn load_project_releases(env: &Env, project_id: u64) -> Vec<u64> {
    let key = DataKey::ProjectReleases(project_id);
    match env.storage().persistent().get::<_, Vec<u64>>(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}
