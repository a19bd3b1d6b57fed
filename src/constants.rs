//! # System Constants
//!
//! Status groupings and system-wide constants shared by the workflow
//! engine, the models layer, and consumers of the crate.

// Re-export state types for convenience
pub use crate::state_machine::{PoStatus, RentalStatus};

/// Status groupings for validation and guidance logic
pub mod status_groups {
    use super::{PoStatus, RentalStatus};

    /// Rental statuses that block closing a linked purchase order
    pub const CLOSURE_BLOCKING_RENTAL_STATUSES: &[RentalStatus] = &[
        RentalStatus::Active,
        RentalStatus::Delivered,
        RentalStatus::Pending,
    ];

    /// Rental statuses that never hold up PO closure
    pub const CLOSURE_NEUTRAL_RENTAL_STATUSES: &[RentalStatus] =
        &[RentalStatus::Submitted, RentalStatus::Denied];

    /// Purchase order statuses with no outgoing transitions
    pub const PO_TERMINAL_STATUSES: &[PoStatus] = &[PoStatus::Closed, PoStatus::Cancelled];

    /// Statuses offered for a brand-new purchase order with no status yet
    pub const NEW_RECORD_STATUS_CHOICES: &[PoStatus] = &[PoStatus::Draft, PoStatus::Open];
}

/// System-wide constants
pub mod system {
    /// Placeholder actor for writes with no authenticated user attached
    pub const UNKNOWN_ACTOR: &str = "unknown";

    /// Version compatibility marker
    pub const FRED_CORE_VERSION: &str = "0.1.0";
}
