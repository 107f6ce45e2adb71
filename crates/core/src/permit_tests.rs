// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn apply(permit: Permit, input: PermitInput) -> (Permit, SyncEvent) {
    let (permit, mut events) = permit.transition(input);
    assert_eq!(events.len(), 1);
    (permit, events.remove(0))
}

#[test]
fn new_permit_is_empty() {
    let permit = Permit::new("key");
    assert!(!permit.is_posted());
    assert_eq!(permit.state, PermitState::Empty);
}

#[test]
fn post_then_take_consumes_the_permit() {
    let (permit, event) = apply(Permit::new("key"), PermitInput::Post);
    assert!(permit.is_posted());
    assert!(matches!(event, SyncEvent::PermitPosted { ref name } if name == "key"));

    let (permit, event) = apply(permit, PermitInput::Take);
    assert!(!permit.is_posted());
    assert!(matches!(event, SyncEvent::PermitTaken { .. }));
}

#[test]
fn take_on_empty_is_unavailable_and_keeps_state() {
    let (permit, event) = apply(Permit::new("key"), PermitInput::Take);
    assert_eq!(permit.state, PermitState::Empty);
    assert!(matches!(event, SyncEvent::PermitUnavailable { .. }));
}

#[test]
fn second_post_is_an_overwrite_not_a_count() {
    let (permit, _) = apply(Permit::new("key"), PermitInput::Post);
    let (permit, event) = apply(permit, PermitInput::Post);
    assert!(matches!(event, SyncEvent::PermitOverwritten { .. }));

    let (permit, first) = apply(permit, PermitInput::Take);
    let (_, second) = apply(permit, PermitInput::Take);
    assert!(matches!(first, SyncEvent::PermitTaken { .. }));
    assert!(matches!(second, SyncEvent::PermitUnavailable { .. }));
}

use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = PermitInput> {
    prop_oneof![Just(PermitInput::Post), Just(PermitInput::Take)]
}

proptest! {
    #[test]
    fn take_succeeds_iff_posted_since_last_take(
        inputs in proptest::collection::vec(arb_input(), 0..50)
    ) {
        let mut permit = Permit::new("key");
        let mut posted_since_take = false;

        for input in inputs {
            let (next, events) = permit.transition(input);
            match input {
                PermitInput::Post => posted_since_take = true,
                PermitInput::Take => {
                    let taken = matches!(events[0], SyncEvent::PermitTaken { .. });
                    prop_assert_eq!(taken, posted_since_take);
                    posted_since_take = false;
                }
            }
            permit = next;
        }
    }

    #[test]
    fn repeated_posts_equal_a_single_post(posts in 1usize..20) {
        let mut many = Permit::new("key");
        for _ in 0..posts {
            many = many.transition(PermitInput::Post).0;
        }
        let single = Permit::new("key").transition(PermitInput::Post).0;
        prop_assert_eq!(many.state, single.state);
    }
}
