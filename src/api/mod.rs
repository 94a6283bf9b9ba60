//! REST API: DTOs, handlers, error mapping and router assembly.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::create_api_router;
