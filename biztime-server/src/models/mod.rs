//! Request input validated at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod company;
pub mod industry;
pub mod invoice;
pub mod validation;

pub use company::{slugify, CompanyCode, CompanyUpdate, NewCompany};
pub use industry::NewIndustry;
pub use invoice::{Amount, InvoiceUpdate, NewInvoice};
pub use validation::ValidationError;
