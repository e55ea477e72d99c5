//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the selection and token endpoints
//! - Request handlers for redirects and the player page
//! - Static asset fallback
//! - CORS middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
