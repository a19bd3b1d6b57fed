//! # Business Rule Guards
//!
//! Cross-entity preconditions evaluated after the transition table accepts
//! a status change and before anything is written. Guards read related
//! entities through the [`WorkflowStore`] trait but never mutate.

use super::errors::WorkflowError;
use super::persistence::WorkflowStore;
use super::states::PoStatus;
use async_trait::async_trait;

/// A read-only gate on a status change
#[async_trait]
pub trait BusinessRuleGuard<S: WorkflowStore>: Send + Sync {
    /// Check the precondition, returning the typed rejection on failure
    async fn check(&self, po_id: i64, store: &S) -> Result<(), WorkflowError>;

    /// Description of this guard for logging
    fn description(&self) -> &'static str;
}

/// Closing rule: a PO cannot close while linked rentals are still active,
/// delivered, or pending.
pub struct NoBlockingRentalsGuard;

#[async_trait]
impl<S: WorkflowStore> BusinessRuleGuard<S> for NoBlockingRentalsGuard {
    async fn check(&self, po_id: i64, store: &S) -> Result<(), WorkflowError> {
        let count = store.blocking_rental_count(po_id).await?;
        if count > 0 {
            return Err(super::errors::BusinessRuleError::ActiveRentalsBlockClosure(count).into());
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "No linked rentals may be active, delivered, or pending"
    }
}

/// Activation rule: a PO needs a vendor name and a release number before it
/// can go Active. The vendor check runs first so the error is deterministic
/// when both are missing.
pub struct VendorReadyGuard;

#[async_trait]
impl<S: WorkflowStore> BusinessRuleGuard<S> for VendorReadyGuard {
    async fn check(&self, po_id: i64, store: &S) -> Result<(), WorkflowError> {
        let fields = store.activation_fields(po_id).await?;

        if is_blank(fields.vendor_name.as_deref()) {
            return Err(super::errors::BusinessRuleError::MissingVendor.into());
        }
        if is_blank(fields.release_number.as_deref()) {
            return Err(super::errors::BusinessRuleError::MissingReleaseNumber.into());
        }
        Ok(())
    }

    fn description(&self) -> &'static str {
        "Vendor name and release number must be set"
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Run the business rules that apply to a status *change* into
/// `new_status`. Targets with no extra preconditions pass trivially.
pub async fn validate_business_rules<S: WorkflowStore>(
    store: &S,
    po_id: i64,
    new_status: PoStatus,
) -> Result<(), WorkflowError> {
    match new_status {
        PoStatus::Closed => NoBlockingRentalsGuard.check(po_id, store).await,
        PoStatus::Active => VendorReadyGuard.check(po_id, store).await,
        _ => Ok(()),
    }
}
