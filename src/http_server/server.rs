//! # HTTP Server
//!
//! Wires the course routes behind CORS and request logging, and owns the
//! lifetime of the course store.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::course_routes::{course_routes, CourseState};

/// HTTP server for the course catalog
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<CourseState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(CourseState::from_config(&config));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the router with all endpoints
    pub fn build_router(config: &HttpServerConfig, state: Arc<CourseState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            for origin in config.invalid_cors_origins() {
                Logger::warn("CORS_ORIGIN_SKIPPED", &[("origin", origin)]);
            }
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        course_routes(state).layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(log_request))
                .layer(cors),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared course state (store + id generator)
    pub fn state(&self) -> Arc<CourseState> {
        self.state.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        Logger::info(
            "SERVER_START",
            &[
                ("addr", addr.as_str()),
                ("id_strategy", self.config.id_strategy.as_str()),
                ("strict_mode", self.config.strict_mode.to_string().as_str()),
            ],
        );

        let listener = TcpListener::bind(addr.as_str()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let local = listener.local_addr()?;
        let courses = self.state.store.len().unwrap_or(0);
        Logger::info(
            "SERVER_LISTENING",
            &[("addr", local.to_string().as_str()), ("courses", courses.to_string().as_str())],
        );
        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    Logger::info(
        "HTTP_REQUEST",
        &[
            ("elapsed_ms", started.elapsed().as_millis().to_string().as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
        ],
    );
    response
}
