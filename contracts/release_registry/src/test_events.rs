extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{
    AuthoritySet, FeeUpdated, ReleaseCancelled, ReleaseCompleted, ReleaseRequested,
    ReleaseUpdated,
};
use crate::test::{request_for, setup, setup_with_authority, signature};
use crate::{Currency, DEFAULT_RELEASE_FEE};

#[test]
fn test_authority_set_event() {
    let s = setup();
    s.client.set_authority_contract(&s.authority);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![&s.env, symbol_short!("auth_set").into_val(&s.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AuthoritySet = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        AuthoritySet {
            authority: s.authority.clone(),
        }
    );
}

#[test]
fn test_fee_updated_event() {
    let s = setup_with_authority();
    s.client.set_release_fee(&s.authority, &750);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&s.env, symbol_short!("fee_set").into_val(&s.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FeeUpdated = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        FeeUpdated {
            authority: s.authority.clone(),
            fee: 750,
        }
    );
}

#[test]
fn test_release_requested_event() {
    let s = setup_with_authority();
    let requester = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);

    let id = s
        .client
        .request_release(&requester, &request_for(&s.env, &recipient));

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("requested"), release_id)
    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("requested").into_val(&s.env),
        id.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReleaseRequested = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        ReleaseRequested {
            release_id: id,
            project_id: 1,
            milestone_id: 1,
            requester: requester.clone(),
            recipient: recipient.clone(),
            amount: 1000,
            currency: Currency::Stx,
        }
    );
}

#[test]
fn test_release_updated_event() {
    let s = setup_with_authority();
    let requester = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);
    let new_recipient = Address::generate(&s.env);
    let id = s
        .client
        .request_release(&requester, &request_for(&s.env, &recipient));

    s.client.update_release(&recipient, &id, &1500, &new_recipient);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &s.env,
        symbol_short!("updated").into_val(&s.env),
        id.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReleaseUpdated = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        ReleaseUpdated {
            release_id: id,
            project_id: 1,
            updater: recipient.clone(),
            recipient: new_recipient.clone(),
            amount: 1500,
        }
    );
}

#[test]
fn test_release_completed_event() {
    let s = setup_with_authority();
    let requester = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);
    let id = s
        .client
        .request_release(&requester, &request_for(&s.env, &recipient));

    s.client
        .verify_and_release(&s.oracle, &id, &signature(&s.env, 65));

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // The fee token's own transfer event precedes ours.
    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("released").into_val(&s.env),
        id.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReleaseCompleted = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        ReleaseCompleted {
            release_id: id,
            project_id: 1,
            oracle: s.oracle.clone(),
            recipient: recipient.clone(),
            amount: 1000,
            fee: DEFAULT_RELEASE_FEE,
        }
    );
}

#[test]
fn test_release_cancelled_event() {
    let s = setup_with_authority();
    let requester = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);
    let id = s
        .client
        .request_release(&requester, &request_for(&s.env, &recipient));

    s.client.cancel_release(&recipient, &id);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &s.env,
        symbol_short!("cancelled").into_val(&s.env),
        id.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReleaseCancelled = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        ReleaseCancelled {
            release_id: id,
            project_id: 1,
            recipient: recipient.clone(),
        }
    );
}
