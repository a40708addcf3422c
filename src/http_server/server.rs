//! # HTTP Server
//!
//! Combines the book API, the static UI and the middleware stack into one
//! Axum router.

use std::net::SocketAddr;

use axum::{extract::Request, middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::rest_api::book_routes;
use crate::store::{BookStore, SharedBookStore};

use super::config::HttpServerConfig;
use super::request_log::log_requests;
use super::static_files::{spa_fallback, static_assets, API_PREFIX};

/// HTTP server for the book tracker
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a freshly seeded store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = BookStore::seeded();
        log_event_with_fields(Event::StoreSeeded, &[("books", store.len().to_string().as_str())]);
        Self::with_store(config, store.into_shared())
    }

    /// Create a server over an existing store
    pub fn with_store(config: HttpServerConfig, store: SharedBookStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: SharedBookStore) -> Router {
        let assets = static_assets(&config.static_dir, &config.index_file());

        Router::new()
            .nest(API_PREFIX, book_routes(store))
            .fallback(move |request: Request| spa_fallback(assets.clone(), request))
            .layer(Self::cors_layer(config))
            .layer(middleware::from_fn(log_requests))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        let allow_origin = if origins.is_empty() {
            AllowOrigin::from(Any)
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process stops
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        log_event(Event::ServerStart);
        if !self.config.static_dir.is_dir() {
            log_event_with_fields(
                Event::StaticDirMissing,
                &[("static_dir", self.config.static_dir.display().to_string().as_str())],
            );
        }

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::ServerListening, &[("addr", addr.to_string().as_str())]);

        axum::serve(listener, self.router).await
    }
}
