//! Invoice repository
//!
//! `paid_date` follows `paid` inside the UPDATE itself, so the
//! paid/paid_date pairing never depends on a prior read.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::{InvoiceUpdate, NewInvoice};

/// Invoice record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, DbError> {
        sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("invoice", id))
    }

    pub async fn list(&self) -> Result<Vec<Invoice>, DbError> {
        let rows = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert an unpaid invoice dated today. An unknown company code
    /// surfaces as `DbError::Conflict` from the foreign key.
    pub async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, DbError> {
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(&invoice.comp_code)
        .bind(invoice.amt.get())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Update amount and paid flag.
    ///
    /// Paying stamps `paid_date` with today unless it was already paid;
    /// un-paying clears it.
    pub async fn update(&self, id: i32, update: &InvoiceUpdate) -> Result<Invoice, DbError> {
        sqlx::query_as::<_, Invoice>(&format!(
            r#"
            UPDATE invoices
            SET amt = $1,
                paid = $2,
                paid_date = CASE
                    WHEN NOT $2 THEN NULL
                    WHEN paid_date IS NULL THEN CURRENT_DATE
                    ELSE paid_date
                END
            WHERE id = $3
            RETURNING {INVOICE_COLUMNS}
            "#
        ))
        .bind(update.amt.get())
        .bind(update.paid)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("invoice", id))
    }
}
