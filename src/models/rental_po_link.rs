//! # Rental / Purchase Order Link Model
//!
//! Many-to-many join between rentals and purchase orders, mapped to the
//! `fred_rental_po_links` table. The closure business rule counts links
//! whose rental status blocks closure.

use super::rental::Rental;
use crate::state_machine::RentalStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RentalPoLink {
    pub rental_id: i64,
    pub po_id: i64,
    pub linked_at: NaiveDateTime,
}

impl RentalPoLink {
    /// Link a rental to a purchase order (no-op if already linked)
    pub async fn link(pool: &PgPool, rental_id: i64, po_id: i64) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO fred_rental_po_links (rental_id, po_id, linked_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (rental_id, po_id) DO UPDATE SET rental_id = EXCLUDED.rental_id
            RETURNING rental_id, po_id, linked_at
            "#,
        )
        .bind(rental_id)
        .bind(po_id)
        .fetch_one(pool)
        .await
    }

    /// Remove a rental/PO link, returning whether one existed
    pub async fn unlink(pool: &PgPool, rental_id: i64, po_id: i64) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM fred_rental_po_links WHERE rental_id = $1 AND po_id = $2")
                .bind(rental_id)
                .bind(po_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count rentals linked to a PO whose status is in `statuses`
    pub async fn count_for_po_with_status(
        pool: &PgPool,
        po_id: i64,
        statuses: &[RentalStatus],
    ) -> Result<i64, sqlx::Error> {
        let status_strings: Vec<String> = statuses.iter().map(ToString::to_string).collect();

        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM fred_rental_po_links l
            INNER JOIN fred_rentals r ON r.rental_id = l.rental_id
            WHERE l.po_id = $1 AND r.status = ANY($2)
            "#,
        )
        .bind(po_id)
        .bind(&status_strings)
        .fetch_one(pool)
        .await
    }

    /// All rentals linked to a PO, oldest link first
    pub async fn rentals_for_po(pool: &PgPool, po_id: i64) -> Result<Vec<Rental>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT r.rental_id, r.status, r.equipment_description, r.requested_by,
                   r.created_at, r.updated_at
            FROM fred_rental_po_links l
            INNER JOIN fred_rentals r ON r.rental_id = l.rental_id
            WHERE l.po_id = $1
            ORDER BY l.linked_at ASC
            "#,
        )
        .bind(po_id)
        .fetch_all(pool)
        .await
    }
}
