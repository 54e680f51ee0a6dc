//! biztime-server: HTTP API for companies, invoices and industries
//!
//! Layers, leaves first:
//! - `models`: validated request input (company codes, amounts)
//! - `db`: connection pool, schema migrations, repositories and the
//!   `BizStore` trait handlers are written against
//! - `http`: axum router, JSON error mapping, graceful shutdown

pub mod db;
pub mod http;
pub mod models;

pub use db::{BizStore, DbError, MemoryStore, PgStore};
pub use http::{run_server, ApiError, ServerConfig};
