//! Database layer - connection pool, schema, repositories and stores
//!
//! # Design Principles
//!
//! - Connection pool opened once at startup, closed at shutdown
//! - Handlers see only the `BizStore` trait
//! - Rely on DB constraints, translate violations - no check-then-insert

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use repos::*;
pub use store::BizStore;
