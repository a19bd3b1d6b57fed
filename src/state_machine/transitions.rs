//! # Status Transition Table and Validator
//!
//! The transition table is the single source of truth for "is B reachable
//! from A in one step". It is immutable process-wide configuration; both
//! the transition validator here and the guidance generator consume it.

use super::errors::TransitionError;
use super::states::PoStatus;

/// Allowed next statuses for each status. Terminal statuses map to an
/// empty set.
pub const TRANSITION_TABLE: &[(PoStatus, &[PoStatus])] = &[
    (PoStatus::Draft, &[PoStatus::Open, PoStatus::Cancelled]),
    (PoStatus::Open, &[PoStatus::Active, PoStatus::Cancelled]),
    (PoStatus::Active, &[PoStatus::Closed, PoStatus::Cancelled]),
    (PoStatus::Closed, &[]),
    (PoStatus::Cancelled, &[]),
];

/// Statuses directly reachable from `status` in one step.
pub fn allowed_transitions(status: PoStatus) -> &'static [PoStatus] {
    TRANSITION_TABLE
        .iter()
        .find(|(from, _)| *from == status)
        .map_or(&[], |(_, targets)| *targets)
}

/// Validate a requested status transition against the table.
///
/// A `None` current status models record creation, where no prior state
/// constrains the first assignment. Setting the same status is always a
/// no-op and never an error, even for terminal statuses.
pub fn validate_transition(
    current: Option<PoStatus>,
    new_status: PoStatus,
) -> Result<(), TransitionError> {
    let Some(current) = current else {
        return Ok(());
    };

    if new_status == current {
        return Ok(());
    }

    let allowed = allowed_transitions(current);
    if allowed.is_empty() {
        return Err(TransitionError::TerminalStateViolation(current));
    }

    if !allowed.contains(&new_status) {
        return Err(TransitionError::IllegalTransition {
            from: current,
            to: new_status,
            allowed: allowed.to_vec(),
        });
    }

    Ok(())
}

/// Parse a status string loaded from persistence.
///
/// Status is stored as text, so legacy or hand-edited rows can hold values
/// outside the enumeration; those surface as `InvalidCurrentStatus` rather
/// than being auto-corrected.
pub fn resolve_stored_status(raw: &str) -> Result<PoStatus, TransitionError> {
    raw.parse()
        .map_err(|_| TransitionError::InvalidCurrentStatus(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_status_once() {
        for status in PoStatus::ALL {
            let entries = TRANSITION_TABLE
                .iter()
                .filter(|(from, _)| *from == status)
                .count();
            assert_eq!(entries, 1, "{status} must appear exactly once");
        }
    }

    #[test]
    fn test_allowed_transitions_match_table() {
        assert_eq!(
            allowed_transitions(PoStatus::Draft),
            &[PoStatus::Open, PoStatus::Cancelled]
        );
        assert_eq!(
            allowed_transitions(PoStatus::Open),
            &[PoStatus::Active, PoStatus::Cancelled]
        );
        assert_eq!(
            allowed_transitions(PoStatus::Active),
            &[PoStatus::Closed, PoStatus::Cancelled]
        );
        assert!(allowed_transitions(PoStatus::Closed).is_empty());
        assert!(allowed_transitions(PoStatus::Cancelled).is_empty());
    }

    #[test]
    fn test_creation_allows_any_status() {
        for status in PoStatus::ALL {
            assert!(validate_transition(None, status).is_ok());
        }
    }

    #[test]
    fn test_same_status_is_always_a_noop() {
        for status in PoStatus::ALL {
            assert!(validate_transition(Some(status), status).is_ok());
        }
    }

    #[test]
    fn test_terminal_statuses_reject_any_change() {
        for terminal in [PoStatus::Closed, PoStatus::Cancelled] {
            for target in PoStatus::ALL {
                if target == terminal {
                    continue;
                }
                assert_eq!(
                    validate_transition(Some(terminal), target),
                    Err(TransitionError::TerminalStateViolation(terminal))
                );
            }
        }
    }

    #[test]
    fn test_draft_cannot_skip_to_active() {
        let err = validate_transition(Some(PoStatus::Draft), PoStatus::Active).unwrap_err();
        match err {
            TransitionError::IllegalTransition { from, to, allowed } => {
                assert_eq!(from, PoStatus::Draft);
                assert_eq!(to, PoStatus::Active);
                assert_eq!(allowed, vec![PoStatus::Open, PoStatus::Cancelled]);
            }
            other => panic!("expected IllegalTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_happy_path_transitions() {
        assert!(validate_transition(Some(PoStatus::Draft), PoStatus::Open).is_ok());
        assert!(validate_transition(Some(PoStatus::Open), PoStatus::Active).is_ok());
        assert!(validate_transition(Some(PoStatus::Active), PoStatus::Closed).is_ok());
        assert!(validate_transition(Some(PoStatus::Active), PoStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_open_cannot_skip_to_closed() {
        assert!(matches!(
            validate_transition(Some(PoStatus::Open), PoStatus::Closed),
            Err(TransitionError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn test_stored_status_parsing() {
        assert_eq!(resolve_stored_status("Open").unwrap(), PoStatus::Open);
        assert_eq!(
            resolve_stored_status("Junk").unwrap_err(),
            TransitionError::InvalidCurrentStatus("Junk".to_string())
        );
    }
}
