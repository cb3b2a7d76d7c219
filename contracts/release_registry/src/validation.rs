//! Field validation shared by the registry entry points.

use soroban_sdk::{Address, Bytes, Env, String};

use crate::types::{Currency, ReleaseRequest};
use crate::Error;

/// The all-zero Stellar account. Never accepted as a real identity.
pub const PLACEHOLDER_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub const SIGNATURE_LEN: u32 = 65;

pub const MAX_PENALTY_RATE: u32 = 100;
pub const MAX_INTEREST_RATE: u32 = 20;
pub const MAX_GRACE_PERIOD: u32 = 30;
/// Location limit, in characters.
pub const MAX_LOCATION_LEN: u32 = 100;
/// Byte length of `MAX_LOCATION_LEN` four-byte UTF-8 characters.
pub const MAX_LOCATION_BYTES: usize = 4 * MAX_LOCATION_LEN as usize;

pub fn placeholder_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, PLACEHOLDER_ACCOUNT))
}

pub fn is_placeholder(env: &Env, address: &Address) -> bool {
    *address == placeholder_address(env)
}

/// Check every field of a new release. The first failing check wins, in
/// declaration order of the request fields.
pub fn validate_request(env: &Env, request: &ReleaseRequest) -> Result<Currency, Error> {
    if request.project_id == 0 {
        return Err(Error::InvalidProjectId);
    }
    if request.milestone_id == 0 {
        return Err(Error::InvalidMilestoneId);
    }
    validate_amount(request.amount)?;
    validate_recipient(env, &request.recipient)?;
    if request.penalty_rate > MAX_PENALTY_RATE {
        return Err(Error::InvalidPenalty);
    }
    if request.interest_rate > MAX_INTEREST_RATE {
        return Err(Error::InvalidInterest);
    }
    if request.grace_period > MAX_GRACE_PERIOD {
        return Err(Error::InvalidGracePeriod);
    }
    validate_location(&request.location)?;
    Currency::from_symbol(&request.currency).ok_or(Error::InvalidCurrency)
}

/// Number of characters in `value`, or `None` when it is longer than
/// `MAX_LOCATION_BYTES` or not valid UTF-8.
pub fn location_chars(value: &String) -> Option<u32> {
    let len = value.len() as usize;
    if len > MAX_LOCATION_BYTES {
        return None;
    }
    let mut buf = [0u8; MAX_LOCATION_BYTES];
    let bytes = &mut buf[..len];
    value.copy_into_slice(bytes);
    let text = core::str::from_utf8(bytes).ok()?;
    Some(text.chars().count() as u32)
}

pub fn validate_location(location: &String) -> Result<(), Error> {
    match location_chars(location) {
        Some(n) if n > 0 && n <= MAX_LOCATION_LEN => Ok(()),
        _ => Err(Error::InvalidLocation),
    }
}

pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn validate_recipient(env: &Env, recipient: &Address) -> Result<(), Error> {
    if is_placeholder(env, recipient) {
        return Err(Error::InvalidRecipient);
    }
    Ok(())
}

pub fn validate_signature(signature: &Bytes) -> Result<(), Error> {
    if signature.len() != SIGNATURE_LEN {
        return Err(Error::InvalidSignature);
    }
    Ok(())
}
