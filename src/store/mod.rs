//! Book store
//!
//! Volatile, process-lifetime storage for book records. Every start begins
//! from the same three seed records.

mod book_store;
mod types;

pub use book_store::{seed_books, BookStore, SharedBookStore};
pub use types::{Book, BookId, BookPatch, NewBook};
