//! HTTP gateway for the Alumnet assistant.
//!
//! Exposes the chatbot and health endpoints. The store, provider, and
//! assistant are built once in [`start`] and shared through
//! [`GatewayState`].
//!
//! Built on Axum.

pub mod api;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use alumnet_config::{AppConfig, ServerConfig};
use alumnet_context::{AlumniAssistant, ContextAggregator};

/// Request bodies above this size are rejected before parsing.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub assistant: Arc<AlumniAssistant>,
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - CORS for the configured origin
/// - Request body size limit (1 MB)
/// - HTTP trace logging
pub fn build_router(state: SharedState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/api/chatbot", post(api::chatbot_handler))
        .route("/api/health", get(api::health_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer(&server.cors_origin))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// CORS for a single origin, or any origin when configured as `*`.
///
/// A request from any other origin gets no `Access-Control-Allow-Origin`.
fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origin.trim() == "*" {
        return cors.allow_origin(Any);
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(AllowOrigin::list([value])),
        Err(e) => {
            warn!(origin, error = %e, "Invalid CORS origin, cross-origin requests will be refused");
            cors
        }
    }
}

/// Start the gateway HTTP server.
///
/// Store or listener failures are returned to the caller; the process
/// cannot serve without them.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let store = alumnet_store::open_store(&config.store).await?;
    let provider = alumnet_providers::build_from_config(&config);
    let aggregator = ContextAggregator::new(store.clone(), config.collections.clone());
    let assistant = AlumniAssistant::new(aggregator, provider, config.model.name.clone());

    let state = Arc::new(GatewayState {
        assistant: Arc::new(assistant),
    });
    let app = build_router(state, &config.server);

    info!(
        addr = %addr,
        store = store.name(),
        model = %config.model.name,
        environment = %config.server.environment,
        "Gateway starting"
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnet_config::CollectionNames;
    use alumnet_store::InMemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        let config = AppConfig::default();
        let aggregator = ContextAggregator::new(
            Arc::new(InMemoryStore::new()),
            CollectionNames::default(),
        );
        let provider = alumnet_providers::build_from_config(&config);
        Arc::new(GatewayState {
            assistant: Arc::new(AlumniAssistant::new(aggregator, provider, "gpt-4o-mini")),
        })
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/chatbot")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(test_state(), &ServerConfig::default());

        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let app = build_router(test_state(), &ServerConfig::default());

        let response = app.oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn cors_ignores_other_origins() {
        let app = build_router(test_state(), &ServerConfig::default());

        let response = app.oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn wildcard_origin_allows_any() {
        let server = ServerConfig {
            cors_origin: "*".into(),
            ..ServerConfig::default()
        };
        let app = build_router(test_state(), &server);

        let response = app.oneshot(preflight("http://anywhere.example")).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn oversized_body_is_413() {
        let app = build_router(test_state(), &ServerConfig::default());
        let message = "a".repeat(BODY_LIMIT_BYTES + 1);
        let body = serde_json::json!({ "message": message }).to_string();

        let req = Request::builder()
            .method("POST")
            .uri("/api/chatbot")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
