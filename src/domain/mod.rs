//! Core business entities and errors.

pub mod error;
pub mod report;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use report::{NewReport, Report};
pub use user::{NewUser, User};
