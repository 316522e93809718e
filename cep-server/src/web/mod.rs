//! Web layer for the postal-code and area-code lookup.
//!
//! Serves the tabbed page and the four query endpoints. Each endpoint
//! answers with HTML card fragments when the request accepts `text/html`
//! and with JSON otherwise.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, ResponseFormat, create_router};
pub use state::AppState;
pub use templates::*;
