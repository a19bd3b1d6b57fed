//! # Workflow Engine Error Types
//!
//! Typed rejection and infrastructure errors for the PO workflow engine.
//! Transition and business-rule failures are expected, user-correctable
//! outcomes; store errors are infrastructure failures and a distinct class.

use super::states::PoStatus;
use thiserror::Error;

/// Errors from the pure transition validator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The stored status is not a recognized enum value (legacy or
    /// corrupted data). Never auto-corrected.
    #[error("Unrecognized purchase order status: {0}")]
    InvalidCurrentStatus(String),

    #[error("Purchase order is {0} and cannot change status")]
    TerminalStateViolation(PoStatus),

    #[error(
        "Cannot transition from {from} to {to}. Allowed transitions: {}",
        format_statuses(allowed)
    )]
    IllegalTransition {
        from: PoStatus,
        to: PoStatus,
        allowed: Vec<PoStatus>,
    },
}

/// Errors from the cross-entity business-rule validator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusinessRuleError {
    #[error("Cannot close PO. It has {0} active rental(s). Complete or cancel all rentals first.")]
    ActiveRentalsBlockClosure(i64),

    #[error("Cannot activate PO without a vendor name")]
    MissingVendor,

    #[error("Cannot activate PO without a release number")]
    MissingReleaseNumber,
}

/// Infrastructure errors from the data-access collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Purchase order {0} not found")]
    PoNotFound(i64),

    /// The PO's status moved between validation and write. The write is
    /// aborted; the caller should re-read and retry deliberately.
    #[error("Purchase order {po_id} was modified concurrently (expected status {expected:?})")]
    StatusConflict {
        po_id: i64,
        expected: Option<PoStatus>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Umbrella error for a status-change attempt
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorkflowError {
    /// True for definitive, user-correctable rejections (never retried
    /// automatically), false for infrastructure failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            WorkflowError::Transition(_) | WorkflowError::BusinessRule(_)
        )
    }
}

fn format_statuses(statuses: &[PoStatus]) -> String {
    statuses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_transition_message_carries_allowed_set() {
        let err = TransitionError::IllegalTransition {
            from: PoStatus::Draft,
            to: PoStatus::Active,
            allowed: vec![PoStatus::Open, PoStatus::Cancelled],
        };
        assert_eq!(
            err.to_string(),
            "Cannot transition from Draft to Active. Allowed transitions: Open, Cancelled"
        );
    }

    #[test]
    fn test_closure_message_carries_count() {
        let err = BusinessRuleError::ActiveRentalsBlockClosure(3);
        assert_eq!(
            err.to_string(),
            "Cannot close PO. It has 3 active rental(s). Complete or cancel all rentals first."
        );
    }

    #[test]
    fn test_rejection_classification() {
        let err: WorkflowError = TransitionError::TerminalStateViolation(PoStatus::Closed).into();
        assert!(err.is_rejection());

        let err: WorkflowError = BusinessRuleError::MissingVendor.into();
        assert!(err.is_rejection());

        let err: WorkflowError = StoreError::PoNotFound(7).into();
        assert!(!err.is_rejection());
    }
}
