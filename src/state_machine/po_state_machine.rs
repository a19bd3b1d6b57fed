//! # Purchase Order State Machine
//!
//! Orchestrates a status change as an isolated read-validate-write
//! sequence: resolve the current status, short-circuit same-status
//! requests, run the transition validator, run the business-rule guards,
//! then persist with a compare-and-set write.

use super::errors::WorkflowError;
use super::guards::validate_business_rules;
use super::persistence::WorkflowStore;
use super::states::PoStatus;
use super::transitions::{resolve_stored_status, validate_transition};
use crate::models::PurchaseOrder;
use tracing::{debug, info, warn};

/// State machine for one purchase order, bound to a data-access store.
pub struct PoStateMachine<S: WorkflowStore> {
    po_id: i64,
    store: S,
}

impl<S: WorkflowStore> PoStateMachine<S> {
    pub fn new(po_id: i64, store: S) -> Self {
        Self { po_id, store }
    }

    pub fn po_id(&self) -> i64 {
        self.po_id
    }

    /// Resolve the PO's current status from the store.
    ///
    /// `None` means the record exists but has no status yet (fresh
    /// record); an unrecognized stored value surfaces as
    /// `InvalidCurrentStatus`.
    pub async fn current_status(&self) -> Result<Option<PoStatus>, WorkflowError> {
        match self.store.load_status(self.po_id).await? {
            Some(raw) => Ok(Some(resolve_stored_status(&raw)?)),
            None => Ok(None),
        }
    }

    /// Apply a status change on behalf of `actor`.
    ///
    /// Same-status requests skip both validators and only touch audit
    /// fields. Validator failures are definitive rejections with zero side
    /// effects; there is no partial-write state.
    pub async fn apply_status_change(
        &self,
        new_status: PoStatus,
        actor: &str,
    ) -> Result<PurchaseOrder, WorkflowError> {
        let current = self.current_status().await?;

        if current == Some(new_status) {
            debug!(
                po_id = self.po_id,
                status = %new_status,
                actor,
                "same-status request, touching audit fields only"
            );
            return Ok(self.store.touch_audit(self.po_id, actor).await?);
        }

        if let Err(err) = validate_transition(current, new_status) {
            warn!(
                po_id = self.po_id,
                current = ?current,
                requested = %new_status,
                actor,
                error = %err,
                "status transition rejected"
            );
            return Err(err.into());
        }

        if let Err(err) = validate_business_rules(&self.store, self.po_id, new_status).await {
            if err.is_rejection() {
                warn!(
                    po_id = self.po_id,
                    requested = %new_status,
                    actor,
                    error = %err,
                    "status change blocked by business rule"
                );
            }
            return Err(err);
        }

        let po = self
            .store
            .persist_status(self.po_id, current, new_status, actor)
            .await?;

        info!(
            po_id = self.po_id,
            from = ?current,
            to = %new_status,
            actor,
            "purchase order status changed"
        );

        Ok(po)
    }

    /// Check if the PO is in a terminal status
    pub async fn is_terminal(&self) -> Result<bool, WorkflowError> {
        Ok(self
            .current_status()
            .await?
            .is_some_and(|status| status.is_terminal()))
    }
}
