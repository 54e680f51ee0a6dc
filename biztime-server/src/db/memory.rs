//! In-memory store for tests and development
//!
//! Enforces the same keys as the Postgres schema: unique company codes and
//! names, unique industry names, foreign keys with cascading deletes.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use super::repos::{Association, Company, Industry, IndustryWithCompanies, Invoice};
use super::{BizStore, DbError};
use crate::models::{CompanyUpdate, InvoiceUpdate, NewCompany, NewIndustry, NewInvoice};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
    industries: BTreeMap<String, Industry>,
    /// Ordered by company code, so per-industry lists come out sorted
    links: BTreeSet<Association>,
}

impl Tables {
    fn name_taken(&self, name: &str, except_code: Option<&str>) -> bool {
        self.companies
            .values()
            .any(|c| c.name == name && Some(c.code.as_str()) != except_code)
    }
}

/// Thread-safe in-memory store. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[async_trait]
impl BizStore for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }

    async fn get_company(&self, code: &str) -> Result<Company, DbError> {
        let tables = self.tables.read().await;
        tables
            .companies
            .get(code)
            .cloned()
            .ok_or_else(|| DbError::not_found("company", code))
    }

    async fn company_invoice_ids(&self, code: &str) -> Result<Vec<i32>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .invoices
            .values()
            .filter(|inv| inv.comp_code == code)
            .map(|inv| inv.id)
            .collect())
    }

    async fn create_company(&self, company: &NewCompany) -> Result<Company, DbError> {
        let mut tables = self.tables.write().await;
        if tables.companies.contains_key(company.code.as_str()) {
            return Err(DbError::Conflict(
                "duplicate value violates companies_pkey".into(),
            ));
        }
        if tables.name_taken(&company.name, None) {
            return Err(DbError::Conflict(
                "duplicate value violates companies_name_key".into(),
            ));
        }

        let row = Company {
            code: company.code.as_str().to_owned(),
            name: company.name.clone(),
            description: company.description.clone(),
        };
        tables.companies.insert(row.code.clone(), row.clone());
        Ok(row)
    }

    async fn update_company(
        &self,
        code: &str,
        update: &CompanyUpdate,
    ) -> Result<Company, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(code) {
            return Err(DbError::not_found("company", code));
        }
        if tables.name_taken(&update.name, Some(code)) {
            return Err(DbError::Conflict(
                "duplicate value violates companies_name_key".into(),
            ));
        }

        let row = tables
            .companies
            .get_mut(code)
            .ok_or_else(|| DbError::not_found("company", code))?;
        row.name = update.name.clone();
        row.description = update.description.clone();
        Ok(row.clone())
    }

    async fn delete_company(&self, code: &str) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if tables.companies.remove(code).is_none() {
            return Err(DbError::not_found("company", code));
        }
        tables.invoices.retain(|_, inv| inv.comp_code != code);
        tables.links.retain(|link| link.company_code != code);
        Ok(())
    }

    async fn create_industry(&self, industry: &NewIndustry) -> Result<Industry, DbError> {
        let mut tables = self.tables.write().await;
        if tables.industries.contains_key(&industry.code) {
            return Err(DbError::Conflict(
                "duplicate value violates industries_pkey".into(),
            ));
        }
        if tables
            .industries
            .values()
            .any(|i| i.industry == industry.industry)
        {
            return Err(DbError::Conflict(
                "duplicate value violates industries_industry_key".into(),
            ));
        }

        let row = Industry {
            code: industry.code.clone(),
            industry: industry.industry.clone(),
        };
        tables.industries.insert(row.code.clone(), row.clone());
        Ok(row)
    }

    async fn list_industries(&self) -> Result<Vec<IndustryWithCompanies>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .industries
            .values()
            .map(|ind| IndustryWithCompanies {
                code: ind.code.clone(),
                industry: ind.industry.clone(),
                companies: tables
                    .links
                    .iter()
                    .filter(|link| link.industry_code == ind.code)
                    .map(|link| link.company_code.clone())
                    .collect(),
            })
            .collect())
    }

    async fn associate(
        &self,
        company_code: &str,
        industry_code: &str,
    ) -> Result<Association, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(company_code) {
            return Err(DbError::Conflict(
                "referenced row missing for companies_industries_company_code_fkey".into(),
            ));
        }
        if !tables.industries.contains_key(industry_code) {
            return Err(DbError::Conflict(
                "referenced row missing for companies_industries_industry_code_fkey".into(),
            ));
        }

        let link = Association {
            company_code: company_code.to_owned(),
            industry_code: industry_code.to_owned(),
        };
        if !tables.links.insert(link.clone()) {
            return Err(DbError::Conflict(
                "duplicate value violates companies_industries_pkey".into(),
            ));
        }
        Ok(link)
    }

    async fn get_invoice(&self, id: i32) -> Result<Invoice, DbError> {
        let tables = self.tables.read().await;
        tables
            .invoices
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("invoice", id))
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.invoices.values().cloned().collect())
    }

    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&invoice.comp_code) {
            return Err(DbError::Conflict(
                "referenced row missing for invoices_comp_code_fkey".into(),
            ));
        }

        tables.last_invoice_id += 1;
        let row = Invoice {
            id: tables.last_invoice_id,
            comp_code: invoice.comp_code.clone(),
            amt: invoice.amt.get(),
            paid: false,
            add_date: today(),
            paid_date: None,
        };
        tables.invoices.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_invoice(&self, id: i32, update: &InvoiceUpdate) -> Result<Invoice, DbError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .invoices
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("invoice", id))?;

        row.amt = update.amt.get();
        row.paid_date = match (update.paid, row.paid_date) {
            (false, _) => None,
            (true, Some(existing)) => Some(existing),
            (true, None) => Some(today()),
        };
        row.paid = update.paid;
        Ok(row.clone())
    }
}
