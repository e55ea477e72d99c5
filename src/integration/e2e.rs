//! End-to-end integration tests
//!
//! Walks the full selection flow the way a client would: default-server
//! redirect, token mint, token resolution, player page emission.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::http::create_router;
use crate::state::AppState;

/// Build a fresh state + router pair for a test run.
pub fn test_app() -> (Arc<AppState>, axum::Router) {
    let state = Arc::new(AppState::new(ServerConfig::default()));
    let router = create_router(state.clone());
    (state, router)
}
