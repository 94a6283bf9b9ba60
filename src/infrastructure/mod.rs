//! External concerns: database connection, schema, persistence gateway.

pub mod database;

pub use database::{init_database, DatabaseConfig, UnitOfWork};
