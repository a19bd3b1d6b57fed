//! # Rental Model
//!
//! Equipment rental request, tracked through its own status lifecycle
//! (`Submitted`, `Pending`, `Active`, `Delivered`, `Denied`) and optionally
//! linked to purchase orders for billing.
//!
//! Maps to the `fred_rentals` table. The workflow engine only reads
//! rentals (through the link table) to decide whether a linked PO may
//! close.

use crate::state_machine::RentalStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub rental_id: i64,
    pub status: String,
    pub equipment_description: String,
    pub requested_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New rental request for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRental {
    pub status: RentalStatus,
    pub equipment_description: String,
    pub requested_by: Option<String>,
}

const RENTAL_COLUMNS: &str =
    "rental_id, status, equipment_description, requested_by, created_at, updated_at";

impl Rental {
    /// Create a new rental request
    pub async fn create(pool: &PgPool, new_rental: NewRental) -> Result<Self, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO fred_rentals (status, equipment_description, requested_by, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING {RENTAL_COLUMNS}
            "#
        );

        sqlx::query_as(&sql)
            .bind(new_rental.status.to_string())
            .bind(&new_rental.equipment_description)
            .bind(&new_rental.requested_by)
            .fetch_one(pool)
            .await
    }

    /// Find a rental by ID
    pub async fn find_by_id(pool: &PgPool, rental_id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("SELECT {RENTAL_COLUMNS} FROM fred_rentals WHERE rental_id = $1");
        sqlx::query_as(&sql)
            .bind(rental_id)
            .fetch_optional(pool)
            .await
    }

    /// Move a rental to a new status
    pub async fn update_status(
        &mut self,
        pool: &PgPool,
        status: RentalStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE fred_rentals SET status = $2, updated_at = NOW() WHERE rental_id = $1",
        )
        .bind(self.rental_id)
        .bind(status.to_string())
        .execute(pool)
        .await?;

        self.status = status.to_string();
        Ok(())
    }

    /// Parsed status, if the stored text is a recognized value
    pub fn rental_status(&self) -> Option<RentalStatus> {
        self.status.parse().ok()
    }
}
