//! book-tracker - a small book-tracking REST API with a single-page UI
//!
//! - [`store`]: in-memory book list with sequential, never-reused ids
//! - [`validation`]: rule table for create/update payloads
//! - [`rest_api`]: `/api/books` CRUD handlers and the error formatter
//! - [`http_server`]: router, static UI, CORS, request logging
//! - [`cli`]: process entry point

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
pub mod validation;
