//! HTTP surface for the Dom Ojca site.
//!
//! Serves the rendered pages and embedded assets, plus a small JSON API
//! used by the client script: chat sessions, the contact form, content
//! and translation bundles, and the theme preference cookie.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
