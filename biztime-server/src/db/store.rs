//! Data-access interface the HTTP layer is written against
//!
//! `PgStore` backs production; `MemoryStore` mirrors its constraint
//! behaviour for tests and local development.

use async_trait::async_trait;

use super::repos::{
    Association, Company, CompanyWithInvoices, Industry, IndustryWithCompanies, Invoice,
};
use super::DbError;
use crate::models::{CompanyUpdate, InvoiceUpdate, NewCompany, NewIndustry, NewInvoice};

#[async_trait]
pub trait BizStore: Send + Sync {
    /// Whether the backing store answers.
    async fn ping(&self) -> bool;

    /// Release connections. Called once after the server stops.
    async fn close(&self) {}

    async fn get_company(&self, code: &str) -> Result<Company, DbError>;

    async fn company_invoice_ids(&self, code: &str) -> Result<Vec<i32>, DbError>;

    async fn create_company(&self, company: &NewCompany) -> Result<Company, DbError>;

    async fn update_company(&self, code: &str, update: &CompanyUpdate)
        -> Result<Company, DbError>;

    async fn delete_company(&self, code: &str) -> Result<(), DbError>;

    async fn create_industry(&self, industry: &NewIndustry) -> Result<Industry, DbError>;

    async fn list_industries(&self) -> Result<Vec<IndustryWithCompanies>, DbError>;

    async fn associate(
        &self,
        company_code: &str,
        industry_code: &str,
    ) -> Result<Association, DbError>;

    async fn get_invoice(&self, id: i32) -> Result<Invoice, DbError>;

    async fn list_invoices(&self) -> Result<Vec<Invoice>, DbError>;

    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, DbError>;

    async fn update_invoice(&self, id: i32, update: &InvoiceUpdate) -> Result<Invoice, DbError>;

    /// Company plus invoice ids. Two sequential reads with no transaction:
    /// the company lookup short-circuits with NotFound before the second.
    async fn company_with_invoices(&self, code: &str) -> Result<CompanyWithInvoices, DbError> {
        let company = self.get_company(code).await?;
        let invoices = self.company_invoice_ids(code).await?;
        Ok(CompanyWithInvoices { company, invoices })
    }
}
