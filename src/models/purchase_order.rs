//! # Purchase Order Model
//!
//! Procurement record authorizing payment to a vendor for rented
//! equipment.
//!
//! ## Database Schema
//!
//! Maps to the `fred_purchase_orders` table:
//! - `po_id`: Primary key (BIGINT)
//! - `po_number`: Human-facing PO identifier (VARCHAR, unique)
//! - `status`: Workflow status as literal text, nullable for brand-new
//!   records (`Draft`, `Open`, `Active`, `Closed`, `Cancelled`)
//! - `vendor_name`, `release_number`: Required before activation
//! - `created_by` / `updated_by` / timestamps: Audit columns
//!
//! Status mutations must go through
//! [`crate::state_machine::PoStateMachine`]; the plain CRUD here never
//! touches the status column.

use crate::state_machine::{resolve_stored_status, PoStatus, TransitionError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PurchaseOrder {
    pub po_id: i64,
    pub po_number: String,
    pub status: Option<String>,
    pub vendor_name: Option<String>,
    pub release_number: Option<String>,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New purchase order for creation (without generated fields).
///
/// Any status (or none at all) is permitted on creation; no current
/// status exists yet to constrain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    pub po_number: String,
    pub status: Option<PoStatus>,
    pub vendor_name: Option<String>,
    pub release_number: Option<String>,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
    pub created_by: Option<String>,
}

/// Column list shared by every query returning a full `PurchaseOrder` row,
/// including the workflow store's status writes.
pub(crate) const PO_COLUMNS: &str =
    "po_id, po_number, status, vendor_name, release_number, description, \
     estimated_cost, created_by, updated_by, created_at, updated_at";

impl PurchaseOrder {
    /// Parse the stored status into the closed enum.
    ///
    /// `Ok(None)` for a record with no status yet; unrecognized stored
    /// values surface as `TransitionError::InvalidCurrentStatus`.
    pub fn current_status(&self) -> Result<Option<PoStatus>, TransitionError> {
        match self.status.as_deref() {
            Some(raw) => Ok(Some(resolve_stored_status(raw)?)),
            None => Ok(None),
        }
    }

    /// Create a new purchase order
    pub async fn create(pool: &PgPool, new_po: NewPurchaseOrder) -> Result<Self, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO fred_purchase_orders (
                po_number, status, vendor_name, release_number, description,
                estimated_cost, created_by, updated_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7, NOW(), NOW())
            RETURNING {PO_COLUMNS}
            "#
        );

        sqlx::query_as(&sql)
            .bind(&new_po.po_number)
            .bind(new_po.status.map(|status| status.to_string()))
            .bind(&new_po.vendor_name)
            .bind(&new_po.release_number)
            .bind(&new_po.description)
            .bind(new_po.estimated_cost)
            .bind(&new_po.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a purchase order by ID
    pub async fn find_by_id(pool: &PgPool, po_id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("SELECT {PO_COLUMNS} FROM fred_purchase_orders WHERE po_id = $1");
        sqlx::query_as(&sql).bind(po_id).fetch_optional(pool).await
    }

    /// Find a purchase order by its human-facing number
    pub async fn find_by_number(pool: &PgPool, po_number: &str) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("SELECT {PO_COLUMNS} FROM fred_purchase_orders WHERE po_number = $1");
        sqlx::query_as(&sql)
            .bind(po_number)
            .fetch_optional(pool)
            .await
    }

    /// List purchase orders in a given status, newest first
    pub async fn list_by_status(
        pool: &PgPool,
        status: PoStatus,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {PO_COLUMNS} FROM fred_purchase_orders WHERE status = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as(&sql)
            .bind(status.to_string())
            .fetch_all(pool)
            .await
    }

    /// Update descriptive/vendor fields without touching status
    pub async fn update_details(
        &mut self,
        pool: &PgPool,
        vendor_name: Option<String>,
        release_number: Option<String>,
        description: Option<String>,
        actor: &str,
    ) -> Result<(), sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE fred_purchase_orders
            SET vendor_name = $2, release_number = $3, description = $4,
                updated_by = $5, updated_at = NOW()
            WHERE po_id = $1
            RETURNING {PO_COLUMNS}
            "#
        );

        let updated: PurchaseOrder = sqlx::query_as(&sql)
            .bind(self.po_id)
            .bind(&vendor_name)
            .bind(&release_number)
            .bind(&description)
            .bind(actor)
            .fetch_one(pool)
            .await?;

        *self = updated;
        Ok(())
    }

    /// Delete a purchase order unless rentals are still linked to it.
    ///
    /// Returns `true` when the row was deleted, `false` when it was kept
    /// (missing or still linked).
    pub async fn delete(pool: &PgPool, po_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM fred_purchase_orders
            WHERE po_id = $1
              AND NOT EXISTS (SELECT 1 FROM fred_rental_po_links WHERE po_id = $1)
            "#,
        )
        .bind(po_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_po(status: Option<&str>) -> PurchaseOrder {
        let now = Utc::now().naive_utc();
        PurchaseOrder {
            po_id: 1,
            po_number: "PO-2024-0001".to_string(),
            status: status.map(String::from),
            vendor_name: Some("Acme Equipment Co".to_string()),
            release_number: Some("R-100".to_string()),
            description: None,
            estimated_cost: Some(1250.0),
            created_by: Some("jsmith".to_string()),
            updated_by: Some("jsmith".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_current_status_parses_stored_text() {
        assert_eq!(
            sample_po(Some("Active")).current_status().unwrap(),
            Some(PoStatus::Active)
        );
        assert_eq!(sample_po(None).current_status().unwrap(), None);
    }

    #[test]
    fn test_po_columns_cover_every_model_field() {
        let po = serde_json::to_value(sample_po(Some("Open"))).unwrap();
        for field in po.as_object().unwrap().keys() {
            assert!(
                PO_COLUMNS.contains(field.as_str()),
                "column list is missing {field}"
            );
        }
    }

    #[test]
    fn test_current_status_rejects_legacy_values() {
        let err = sample_po(Some("ACTIVE")).current_status().unwrap_err();
        assert_eq!(err, TransitionError::InvalidCurrentStatus("ACTIVE".to_string()));
    }
}
