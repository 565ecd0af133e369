//! Web layer for subway line management.
//!
//! Provides HTTP endpoints for stations, lines and sections.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
