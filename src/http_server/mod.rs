//! # Book Tracker HTTP Server
//!
//! # Endpoints
//!
//! - `/api/books` - Book CRUD
//! - anything else - static UI, with `index.html` as the SPA fallback

pub mod config;
pub mod request_log;
pub mod server;
pub mod static_files;

pub use config::{ConfigError, ConfigOverrides, HttpServerConfig, PORT_ENV};
pub use server::HttpServer;
