#![allow(dead_code)]

extern crate std;

use crate::types::{Release, ReleasePhase, ReleaseRequest};
use crate::validation::{location_chars, MAX_GRACE_PERIOD, MAX_INTEREST_RATE, MAX_LOCATION_LEN, MAX_PENALTY_RATE};

/// INV-1: A released record must also be verified.
pub fn assert_released_implies_verified(release: &Release) {
    assert!(
        !release.released || release.verified,
        "INV-1 violated: release {} is released but not verified",
        release.id
    );
}

/// INV-2: Amount must always be positive.
pub fn assert_amount_positive(release: &Release) {
    assert!(
        release.amount > 0,
        "INV-2 violated: release {} has non-positive amount ({})",
        release.id,
        release.amount
    );
}

/// INV-3: Project and milestone IDs are never zero.
pub fn assert_ids_positive(release: &Release) {
    assert!(
        release.project_id > 0 && release.milestone_id > 0,
        "INV-3 violated: release {} has zero project or milestone id",
        release.id
    );
}

/// INV-4: Rates, grace period and location stay within their bounds.
pub fn assert_fields_in_range(release: &Release) {
    assert!(release.penalty_rate <= MAX_PENALTY_RATE, "INV-4 violated: penalty rate");
    assert!(release.interest_rate <= MAX_INTEREST_RATE, "INV-4 violated: interest rate");
    assert!(release.grace_period <= MAX_GRACE_PERIOD, "INV-4 violated: grace period");
    let chars = location_chars(&release.location);
    assert!(
        matches!(chars, Some(n) if n > 0 && n <= MAX_LOCATION_LEN),
        "INV-4 violated: location length {:?}",
        chars
    );
}

/// INV-5: Release IDs are sequential starting from 0.
pub fn assert_sequential_ids(releases: &[Release]) {
    for (i, release) in releases.iter().enumerate() {
        assert_eq!(
            release.id, i as u64,
            "INV-5 violated: expected id {}, got {}",
            i, release.id
        );
    }
}

/// INV-6: Only forward phase transitions happen:
///   Pending -> Released | Cancelled
///   Released  -> (none)
///   Cancelled -> (none)
/// Staying in the same phase is allowed (amendments).
pub fn assert_valid_phase_transition(from: ReleasePhase, to: ReleasePhase) {
    let valid = from == to
        || matches!(
            (from, to),
            (ReleasePhase::Pending, ReleasePhase::Released)
                | (ReleasePhase::Pending, ReleasePhase::Cancelled)
        );

    assert!(
        valid,
        "INV-6 violated: invalid phase transition from {:?} to {:?}",
        from, to
    );
}

/// INV-7: Fields the requester chose are echoed exactly by a fresh record.
pub fn assert_matches_request(release: &Release, request: &ReleaseRequest) {
    assert_eq!(release.project_id, request.project_id, "INV-7 violated: project_id");
    assert_eq!(release.milestone_id, request.milestone_id, "INV-7 violated: milestone_id");
    assert_eq!(release.amount, request.amount, "INV-7 violated: amount");
    assert_eq!(release.recipient, request.recipient, "INV-7 violated: recipient");
    assert_eq!(release.penalty_rate, request.penalty_rate, "INV-7 violated: penalty_rate");
    assert_eq!(release.interest_rate, request.interest_rate, "INV-7 violated: interest_rate");
    assert_eq!(release.grace_period, request.grace_period, "INV-7 violated: grace_period");
    assert_eq!(release.location, request.location, "INV-7 violated: location");
    assert_eq!(release.currency.symbol(), request.currency, "INV-7 violated: currency");
}

/// INV-8: Immutable fields never change after creation.
pub fn assert_immutable_fields(original: &Release, current: &Release) {
    assert_eq!(original.id, current.id, "INV-8 violated: id changed");
    assert_eq!(original.project_id, current.project_id, "INV-8 violated: project_id changed");
    assert_eq!(
        original.milestone_id, current.milestone_id,
        "INV-8 violated: milestone_id changed"
    );
    assert_eq!(original.location, current.location, "INV-8 violated: location changed");
    assert_eq!(original.currency, current.currency, "INV-8 violated: currency changed");
}

/// Run all stateless release invariants.
pub fn assert_all_release_invariants(release: &Release) {
    assert_released_implies_verified(release);
    assert_amount_positive(release);
    assert_ids_positive(release);
    assert_fields_in_range(release);
}
