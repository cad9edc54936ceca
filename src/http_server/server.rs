//! # HTTP Server
//!
//! Combines the trivia routes with the cross-cutting layers: CORS, request
//! tracing and the JSON envelope for unknown routes and wrong methods.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;

use super::errors::ApiError;
use super::trivia_routes::{trivia_routes, TriviaState};

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// HTTP server for the trivia API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: Arc<TriviaState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all layers
    pub fn build_router(config: &ServerConfig, state: Arc<TriviaState>) -> Router {
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        // Origins were checked when the config was validated
        let cors = match config.origin_headers() {
            Ok(origins) if !origins.is_empty() => cors.allow_origin(AllowOrigin::list(origins)),
            _ => cors.allow_origin(Any),
        };

        trivia_routes(state)
            .fallback(unknown_route)
            .layer(map_response(finalize_response))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C, then drain in-flight requests
    pub async fn start(self) -> std::io::Result<()> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "Trivia API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Trivia API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound
}

/// Give framework-generated 405s the JSON envelope and stamp the CORS
/// allow-lists on every response
async fn finalize_response(response: Response) -> Response {
    let mut response = if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        let allow = response.headers().get(header::ALLOW).cloned();
        let mut replaced = ApiError::MethodNotAllowed.into_response();
        if let Some(allow) = allow {
            replaced.headers_mut().insert(header::ALLOW, allow);
        }
        replaced
    } else {
        response
    };

    let headers = response.headers_mut();
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .or_insert(HeaderValue::from_static(ALLOW_HEADERS));
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_METHODS)
        .or_insert(HeaderValue::from_static(ALLOW_METHODS));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[tokio::test]
    async fn test_bare_405_gets_envelope() {
        let bare = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(header::ALLOW, "GET")
            .body(Body::empty())
            .unwrap();

        let finalized = finalize_response(bare).await;
        assert_eq!(finalized.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(finalized.headers()[header::ALLOW], "GET");
        assert_eq!(
            finalized.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_cors_allow_lists_stamped() {
        let ok = Response::new(Body::empty());
        let finalized = finalize_response(ok).await;
        assert_eq!(
            finalized.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            ALLOW_HEADERS
        );
        assert_eq!(
            finalized.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            ALLOW_METHODS
        );
    }
}
