//! HTTP backend for the dashboard page
//!
//! Routes:
//! - `GET /`: embedded dashboard page
//! - `GET /api/handles`: selector options and the default selection
//! - `GET /api/views/:handle`: the view bundle for one selection
//! - `GET /api/status`: health, version and data-quality report

pub mod handler;
pub mod server;

pub use handler::ApiError;
pub use server::{router, DashboardServer};
