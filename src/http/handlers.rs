//! HTTP request handlers
//!
//! Implements handlers for the redirect and token-resolution endpoints.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::GateError;
use crate::player::render_player_page;
use crate::registry::ServerLabel;
use crate::state::{AppState, BindingStats};

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    InvalidServer(String),
    TokenInvalid,
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // The label is echoed only in logs, never in the body; the
            // client-facing message matches the original contract.
            HttpError::InvalidServer(_) => (StatusCode::NOT_FOUND, "Invalid server".to_string()),
            HttpError::TokenInvalid => {
                (StatusCode::GONE, "Token expired or invalid.".to_string())
            }
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, body).into_response()
    }
}

impl From<GateError> for HttpError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::UnknownServer(label) => HttpError::InvalidServer(label),
            GateError::TokenNotFound(_) | GateError::TokenExpired(_) => HttpError::TokenInvalid,
            _ => HttpError::InternalError(err.to_string()),
        }
    }
}

/// Build a 302 Found redirect to `location`.
///
/// `axum::response::Redirect` only offers 303/307/308; the original
/// selection flow uses a plain 302, so the response is built by hand.
fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut headers = HeaderMap::new();
            headers.insert(header::LOCATION, value);
            (StatusCode::FOUND, headers).into_response()
        }
        Err(e) => HttpError::InternalError(format!("Invalid redirect target: {}", e)).into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("vidgate v", env!("CARGO_PKG_VERSION"))
}

/// Store statistics endpoint
/// GET /debug/bindings
pub async fn binding_stats(State(state): State<Arc<AppState>>) -> Json<BindingStats> {
    Json(state.binding_stats())
}

/// Default-server redirect
/// GET /play/{id}
///
/// Only numeric ids are routed into the selection flow; anything else
/// falls out with a 404, mirroring the original route constraint.
pub async fn play_default(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    if !state.is_numeric_id(&id) {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    found(&format!("/play/{}/{}", ServerLabel::DEFAULT, id))
}

/// Server selection: mint a token and redirect to it
/// GET /play/{label}/{id}
pub async fn select_server(
    State(state): State<Arc<AppState>>,
    Path((label, id)): Path<(String, String)>,
) -> Result<Response, HttpError> {
    let label: ServerLabel = label.parse()?;

    let binding = state.create_binding(label, &id);
    tracing::debug!(
        token = %binding.token,
        label = %binding.label,
        media_id = %binding.media_id,
        "Minted playback token"
    );

    Ok(found(&format!("/secure/{}", binding.token)))
}

/// Token-gated player page
/// GET /secure/{token}
pub async fn secure_player(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Response, HttpError> {
    let binding = state.resolve_binding(&token).ok_or(HttpError::TokenInvalid)?;

    let stream_url = binding.label.embed_url(&binding.media_id);
    Ok(Html(render_player_page(&stream_url)).into_response())
}
