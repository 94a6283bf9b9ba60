//! # Report API
//!
//! CRUD backend for hour-tracking reports: users own reports (comment,
//! hour count, date); deleting a user cascades to its reports.
//!
//! ## Architecture
//!
//! - **domain**: business entities and errors
//! - **validation**: per-field request validation with ordered failures
//! - **infrastructure**: database connection, schema and the
//!   request-scoped unit of work
//! - **api**: REST handlers, DTOs and router with Swagger documentation
//! - **locale**: localized (Russian) error message texts

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod locale;
pub mod validation;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::{init_database, DatabaseConfig, UnitOfWork};

// Re-export API router
pub use api::create_api_router;
