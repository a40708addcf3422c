//! # Book REST API
//!
//! CRUD endpoints over the book store, with validation before every write
//! and one central error formatter.

pub mod books;
pub mod errors;

pub use books::book_routes;
pub use errors::{ApiError, ApiResult, ErrorResponse};
