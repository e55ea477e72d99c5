//! Axum router configuration

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{
    binding_stats, health_check, play_default, secure_player, select_server, version_check,
};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS, Method::HEAD])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(Duration::from_secs(3600));

    // Anything that is not a selection, token, or debug route falls
    // through to the static asset directory.
    let assets = ServeDir::new(&state.config.public_dir);

    // Build router
    Router::new()
        // Health and version endpoints
        .route("/health", get(health_check))
        .route("/version", get(version_check))
        // Debug endpoints
        .route("/debug/bindings", get(binding_stats))
        // Selection flow
        .route("/play/{id}", get(play_default))
        .route("/play/{label}/{id}", get(select_server))
        .route("/secure/{token}", get(secure_player))
        // Static assets
        .fallback_service(assets)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_app() -> (Arc<AppState>, Router) {
        let state = Arc::new(AppState::new(ServerConfig::default()));
        let app = create_router(state.clone());
        (state, app)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_create_router() {
        let state = Arc::new(AppState::new(ServerConfig::default()));
        let _router = create_router(state);
        // Router creation successful
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_state, app) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn test_play_default_redirects_to_s1() {
        let (_state, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/play/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/play/S1/42"
        );
    }

    #[tokio::test]
    async fn test_play_default_rejects_non_numeric_id() {
        let (_state, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/play/notanumber")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_select_server_mints_token() {
        let (state, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/play/S5/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let token = location.strip_prefix("/secure/").unwrap();

        let binding = state.resolve_binding(token).unwrap();
        assert_eq!(binding.media_id, "42");
        assert_eq!(binding.label.as_str(), "S5");
    }

    #[tokio::test]
    async fn test_unknown_server_label() {
        let (state, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/play/Sxx/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Invalid server");
        assert_eq!(state.binding_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let (_state, app) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/secure/0123456789abcdef0123456789abcdef")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(body_string(response).await, "Token expired or invalid.");
    }

    #[tokio::test]
    async fn test_binding_stats_endpoint() {
        let (state, app) = test_app();
        state.create_binding(crate::registry::ServerLabel::S1, "42");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/debug/bindings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stats: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["active"], 1);
        assert_eq!(stats["expired"], 0);
    }

    #[tokio::test]
    async fn test_cors_options() {
        let (_state, app) = test_app();

        // Pre-flight OPTIONS request
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/play/42")
            .header(header::ORIGIN, "http://localhost:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
