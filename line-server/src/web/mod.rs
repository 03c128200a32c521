//! Web layer for the line topology server.
//!
//! Provides the JSON endpoints for managing stations, lines, and sections.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
