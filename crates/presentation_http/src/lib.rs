//! Raincheck HTTP presentation layer
//!
//! Serves the search form and renders weather lookups as HTML.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
