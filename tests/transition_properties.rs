//! Property tests for the transition table and its consumers.

use fred_core::state_machine::{
    allowed_next_statuses, allowed_transitions, validate_transition, PoStatus, TransitionError,
    TRANSITION_TABLE,
};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = PoStatus> {
    prop::sample::select(PoStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_noop_is_always_allowed(status in any_status()) {
        prop_assert!(validate_transition(Some(status), status).is_ok());
    }

    #[test]
    fn prop_creation_is_unconstrained(status in any_status()) {
        prop_assert!(validate_transition(None, status).is_ok());
    }

    #[test]
    fn prop_table_targets_validate(status in any_status()) {
        for target in allowed_transitions(status) {
            prop_assert!(validate_transition(Some(status), *target).is_ok());
        }
    }

    #[test]
    fn prop_terminal_iff_no_successors(status in any_status()) {
        prop_assert_eq!(status.is_terminal(), allowed_transitions(status).is_empty());
    }

    #[test]
    fn prop_rejections_carry_the_allowed_set(from in any_status(), to in any_status()) {
        match validate_transition(Some(from), to) {
            Ok(()) => {
                prop_assert!(to == from || allowed_transitions(from).contains(&to));
            }
            Err(TransitionError::TerminalStateViolation(reported)) => {
                prop_assert_eq!(reported, from);
                prop_assert!(from.is_terminal());
            }
            Err(TransitionError::IllegalTransition { from: f, to: t, allowed }) => {
                prop_assert_eq!(f, from);
                prop_assert_eq!(t, to);
                prop_assert_eq!(allowed, allowed_transitions(from).to_vec());
            }
            Err(TransitionError::InvalidCurrentStatus(raw)) => {
                prop_assert!(false, "typed input cannot be unrecognized: {raw}");
            }
        }
    }

    #[test]
    fn prop_dropdown_leads_with_current(status in any_status()) {
        let choices = allowed_next_statuses(Some(status));
        prop_assert_eq!(choices[0], status);
        prop_assert_eq!(&choices[1..], allowed_transitions(status));
    }

    #[test]
    fn prop_no_transition_reenters_draft(status in any_status()) {
        // Draft is only ever an initial status
        prop_assert!(!allowed_transitions(status).contains(&PoStatus::Draft));
    }
}

#[test]
fn table_lists_every_status_exactly_once() {
    for status in PoStatus::ALL {
        assert_eq!(
            TRANSITION_TABLE
                .iter()
                .filter(|(from, _)| *from == status)
                .count(),
            1
        );
    }
}
