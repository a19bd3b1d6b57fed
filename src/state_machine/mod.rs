// Purchase order status workflow engine.
//
// The transition table is the single source of truth for reachability;
// the transition validator and business-rule guards are authoritative,
// and the guidance queries are advisory UI hints over the same table.

pub mod errors;
pub mod guards;
pub mod guidance;
pub mod persistence;
pub mod po_state_machine;
pub mod states;
pub mod transitions;

// Re-export main types for convenient access
pub use errors::{BusinessRuleError, StoreError, TransitionError, WorkflowError};
pub use guards::{validate_business_rules, BusinessRuleGuard, NoBlockingRentalsGuard, VendorReadyGuard};
pub use guidance::{allowed_next_statuses, workflow_info, WorkflowInfo};
pub use persistence::{ActivationFields, PgWorkflowStore, WorkflowStore};
pub use po_state_machine::PoStateMachine;
pub use states::{PoStatus, RentalStatus};
pub use transitions::{allowed_transitions, resolve_stored_status, validate_transition, TRANSITION_TABLE};
