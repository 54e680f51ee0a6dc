//! Industry repository
//!
//! - list: LEFT JOIN + ARRAY_AGG in one query; NULL placeholders from
//!   industries without companies are filtered out of the aggregate
//! - associate: plain INSERT, constraint errors become conflicts

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::NewIndustry;

/// Industry record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Industry with the codes of every linked company
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct IndustryWithCompanies {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

/// Company/industry link row
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, FromRow, Serialize)]
pub struct Association {
    pub company_code: String,
    pub industry_code: String,
}

/// Industry repository
pub struct IndustryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> IndustryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, industry: &NewIndustry) -> Result<Industry, DbError> {
        let row = sqlx::query_as::<_, Industry>(
            r#"
            INSERT INTO industries (code, industry)
            VALUES ($1, $2)
            RETURNING code, industry
            "#,
        )
        .bind(&industry.code)
        .bind(&industry.industry)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List industries with their company codes.
    pub async fn list(&self) -> Result<Vec<IndustryWithCompanies>, DbError> {
        let rows = sqlx::query_as::<_, IndustryWithCompanies>(
            r#"
            SELECT
                i.code,
                i.industry,
                COALESCE(
                    ARRAY_AGG(ci.company_code ORDER BY ci.company_code)
                        FILTER (WHERE ci.company_code IS NOT NULL),
                    '{}'
                ) AS companies
            FROM industries AS i
            LEFT JOIN companies_industries AS ci ON i.code = ci.industry_code
            GROUP BY i.code, i.industry
            ORDER BY i.code
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn associate(
        &self,
        company_code: &str,
        industry_code: &str,
    ) -> Result<Association, DbError> {
        let row = sqlx::query_as::<_, Association>(
            r#"
            INSERT INTO companies_industries (company_code, industry_code)
            VALUES ($1, $2)
            RETURNING company_code, industry_code
            "#,
        )
        .bind(company_code)
        .bind(industry_code)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
