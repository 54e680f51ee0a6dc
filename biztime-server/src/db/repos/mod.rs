//! Repository implementations for PostgreSQL access
//!
//! Each repository borrows the pool and issues one statement per call.
//! Constraint violations are left to the database and translated into
//! `DbError::Conflict`; there is no check-then-insert.

pub mod companies;
pub mod industries;
pub mod invoices;

pub use companies::{Company, CompanyRepo, CompanyWithInvoices};
pub use industries::{Association, Industry, IndustryRepo, IndustryWithCompanies};
pub use invoices::{Invoice, InvoiceRepo};
