//! Company repository
//!
//! - get: company row, then invoice ids in a second query (not atomic)
//! - create/update/delete: single statement with RETURNING

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::{CompanyUpdate, NewCompany};

/// Company record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Company with the ids of invoices billed to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyWithInvoices {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

/// Company repository
pub struct CompanyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single company by code.
    pub async fn get(&self, code: &str) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", code))
    }

    /// Ids of every invoice referencing `code`, oldest first.
    pub async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DbError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id",
        )
        .bind(code)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// Insert a company. Duplicate codes or names surface as `DbError::Conflict`.
    pub async fn create(&self, company: &NewCompany) -> Result<Company, DbError> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(company.code.as_str())
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(&self, code: &str, update: &CompanyUpdate) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", code))
    }

    /// Delete a company; its invoices and industry links cascade.
    pub async fn delete(&self, code: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("company", code));
        }
        Ok(())
    }
}
