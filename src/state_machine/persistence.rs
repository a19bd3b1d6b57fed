//! # Workflow Data Access
//!
//! The engine reads related entities and persists status changes through
//! the [`WorkflowStore`] trait so the validators stay testable without a
//! database. [`PgWorkflowStore`] is the production implementation.

use super::errors::StoreError;
use super::states::PoStatus;
use crate::constants::status_groups;
use crate::models::purchase_order::PO_COLUMNS;
use crate::models::PurchaseOrder;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Vendor/release fields inspected by the activation rule
#[derive(Debug, Clone, FromRow)]
pub struct ActivationFields {
    pub vendor_name: Option<String>,
    pub release_number: Option<String>,
}

/// Data-access collaborator for the workflow engine.
///
/// Reads are evaluated before the status write; the write itself is
/// compare-and-set against the status observed at validation time, so a
/// concurrent change surfaces as [`StoreError::StatusConflict`] instead of
/// silently overwriting.
#[async_trait]
pub trait WorkflowStore: Send + Sync {
    /// Raw stored status for a PO, `None` when the record has no status yet.
    async fn load_status(&self, po_id: i64) -> Result<Option<String>, StoreError>;

    /// Count of linked rentals whose status blocks closure.
    async fn blocking_rental_count(&self, po_id: i64) -> Result<i64, StoreError>;

    /// Vendor name and release number for the activation rule.
    async fn activation_fields(&self, po_id: i64) -> Result<ActivationFields, StoreError>;

    /// Persist a validated status change plus audit fields. The write only
    /// lands if the stored status still equals `expected`.
    async fn persist_status(
        &self,
        po_id: i64,
        expected: Option<PoStatus>,
        new_status: PoStatus,
        actor: &str,
    ) -> Result<PurchaseOrder, StoreError>;

    /// Update audit fields without changing status (same-status requests).
    async fn touch_audit(&self, po_id: i64, actor: &str) -> Result<PurchaseOrder, StoreError>;
}

/// Postgres-backed workflow store
#[derive(Debug, Clone)]
pub struct PgWorkflowStore {
    pool: PgPool,
}

impl PgWorkflowStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn po_exists(&self, po_id: i64) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM fred_purchase_orders WHERE po_id = $1)")
                .bind(po_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

#[async_trait]
impl WorkflowStore for PgWorkflowStore {
    async fn load_status(&self, po_id: i64) -> Result<Option<String>, StoreError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT status FROM fred_purchase_orders WHERE po_id = $1")
                .bind(po_id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((status,)) => Ok(status),
            None => Err(StoreError::PoNotFound(po_id)),
        }
    }

    async fn blocking_rental_count(&self, po_id: i64) -> Result<i64, StoreError> {
        let blocking: Vec<String> = status_groups::CLOSURE_BLOCKING_RENTAL_STATUSES
            .iter()
            .map(ToString::to_string)
            .collect();

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM fred_rental_po_links l
            INNER JOIN fred_rentals r ON r.rental_id = l.rental_id
            WHERE l.po_id = $1 AND r.status = ANY($2)
            "#,
        )
        .bind(po_id)
        .bind(&blocking)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn activation_fields(&self, po_id: i64) -> Result<ActivationFields, StoreError> {
        let fields: Option<ActivationFields> = sqlx::query_as(
            "SELECT vendor_name, release_number FROM fred_purchase_orders WHERE po_id = $1",
        )
        .bind(po_id)
        .fetch_optional(&self.pool)
        .await?;

        fields.ok_or(StoreError::PoNotFound(po_id))
    }

    async fn persist_status(
        &self,
        po_id: i64,
        expected: Option<PoStatus>,
        new_status: PoStatus,
        actor: &str,
    ) -> Result<PurchaseOrder, StoreError> {
        // Compare-and-set: the UPDATE is predicated on the status observed
        // during validation, so two racing writers cannot both win.
        let sql = format!(
            r#"
            UPDATE fred_purchase_orders
            SET status = $2, updated_by = $3, updated_at = NOW()
            WHERE po_id = $1 AND status IS NOT DISTINCT FROM $4
            RETURNING {PO_COLUMNS}
            "#
        );

        let updated: Option<PurchaseOrder> = sqlx::query_as(&sql)
            .bind(po_id)
            .bind(new_status.to_string())
            .bind(actor)
            .bind(expected.map(|status| status.to_string()))
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(po) => Ok(po),
            None => {
                if self.po_exists(po_id).await? {
                    Err(StoreError::StatusConflict { po_id, expected })
                } else {
                    Err(StoreError::PoNotFound(po_id))
                }
            }
        }
    }

    async fn touch_audit(&self, po_id: i64, actor: &str) -> Result<PurchaseOrder, StoreError> {
        let sql = format!(
            r#"
            UPDATE fred_purchase_orders
            SET updated_by = $2, updated_at = NOW()
            WHERE po_id = $1
            RETURNING {PO_COLUMNS}
            "#
        );

        let updated: Option<PurchaseOrder> = sqlx::query_as(&sql)
            .bind(po_id)
            .bind(actor)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or(StoreError::PoNotFound(po_id))
    }
}
