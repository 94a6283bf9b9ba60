//! API Handlers

pub mod reports;
pub mod users;

use sea_orm::DatabaseConnection;

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
