//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{
    Association, Company, CompanyRepo, Industry, IndustryRepo, IndustryWithCompanies, Invoice,
    InvoiceRepo,
};
use super::{BizStore, DbError};
use crate::models::{CompanyUpdate, InvoiceUpdate, NewCompany, NewIndustry, NewInvoice};

/// Store over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BizStore for PgStore {
    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn close(&self) {
        tracing::info!("Closing database pool");
        self.pool.close().await;
    }

    async fn get_company(&self, code: &str) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).get(code).await
    }

    async fn company_invoice_ids(&self, code: &str) -> Result<Vec<i32>, DbError> {
        CompanyRepo::new(&self.pool).invoice_ids(code).await
    }

    async fn create_company(&self, company: &NewCompany) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).create(company).await
    }

    async fn update_company(
        &self,
        code: &str,
        update: &CompanyUpdate,
    ) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).update(code, update).await
    }

    async fn delete_company(&self, code: &str) -> Result<(), DbError> {
        CompanyRepo::new(&self.pool).delete(code).await
    }

    async fn create_industry(&self, industry: &NewIndustry) -> Result<Industry, DbError> {
        IndustryRepo::new(&self.pool).create(industry).await
    }

    async fn list_industries(&self) -> Result<Vec<IndustryWithCompanies>, DbError> {
        IndustryRepo::new(&self.pool).list().await
    }

    async fn associate(
        &self,
        company_code: &str,
        industry_code: &str,
    ) -> Result<Association, DbError> {
        IndustryRepo::new(&self.pool)
            .associate(company_code, industry_code)
            .await
    }

    async fn get_invoice(&self, id: i32) -> Result<Invoice, DbError> {
        InvoiceRepo::new(&self.pool).get(id).await
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, DbError> {
        InvoiceRepo::new(&self.pool).list().await
    }

    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, DbError> {
        InvoiceRepo::new(&self.pool).create(invoice).await
    }

    async fn update_invoice(&self, id: i32, update: &InvoiceUpdate) -> Result<Invoice, DbError> {
        InvoiceRepo::new(&self.pool).update(id, update).await
    }
}
