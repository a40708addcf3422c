//! Book HTTP Routes
//!
//! `GET /books`, `POST /books`, `PUT /books/:id`, `DELETE /books/:id`,
//! nested under `/api` by the server. `/books/` is accepted as `/books`.
//! Any other method or path in this router answers with a structured 404.
//! Extractor rejections go through `ApiError` like every other failure.

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        OriginalUri, Path, State,
    },
    http::{Method, StatusCode},
    routing::{get, put, MethodRouter},
    Json, Router,
};
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::store::{Book, BookId, BookStore, SharedBookStore};
use crate::validation::{validate_create, validate_update};

use super::errors::{ApiError, ApiResult};

// ==================
// Book Routes
// ==================

/// Create book routes over the given store
pub fn book_routes(store: SharedBookStore) -> Router {
    let collection: MethodRouter<SharedBookStore> = get(list_books_handler)
        .post(create_book_handler)
        .fallback(endpoint_not_found_handler);

    Router::new()
        .route("/books", collection.clone())
        .route("/books/", collection)
        .route(
            "/books/:id",
            put(update_book_handler)
                .delete(delete_book_handler)
                .fallback(endpoint_not_found_handler),
        )
        .fallback(endpoint_not_found_handler)
        .with_state(store)
}

// ==================
// Helper Functions
// ==================

fn read_store(store: &SharedBookStore) -> ApiResult<RwLockReadGuard<'_, BookStore>> {
    store
        .read()
        .map_err(|_| ApiError::Internal("book store lock poisoned".to_string()))
}

fn write_store(store: &SharedBookStore) -> ApiResult<RwLockWriteGuard<'_, BookStore>> {
    store
        .write()
        .map_err(|_| ApiError::Internal("book store lock poisoned".to_string()))
}

/// Parse a request body. An empty body reads as `{}`.
pub fn parse_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Parse an id path segment. Anything that cannot name a book is not found.
pub fn parse_id(raw: &str) -> ApiResult<BookId> {
    raw.parse::<BookId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ApiError::BookNotFound)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(store): State<SharedBookStore>) -> ApiResult<Json<Vec<Book>>> {
    let books = read_store(&store)?.list().to_vec();
    Ok(Json(books))
}

async fn create_book_handler(
    State(store): State<SharedBookStore>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let payload = parse_body(&body?)?;
    let fields = validate_create(&payload)?;

    let book = write_store(&store)?.create(fields);
    log_event_with_fields(Event::BookCreated, &[("id", book.id.to_string().as_str())]);

    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(store): State<SharedBookStore>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = path?;
    let payload = parse_body(&body?)?;
    let id = parse_id(&id)?;

    let mut books = write_store(&store)?;
    if books.find_by_id(id).is_none() {
        return Err(ApiError::BookNotFound);
    }

    let patch = validate_update(&payload)?;
    let book = books.update(id, patch).ok_or(ApiError::BookNotFound)?;
    log_event_with_fields(Event::BookUpdated, &[("id", book.id.to_string().as_str())]);

    Ok(Json(book))
}

async fn delete_book_handler(
    State(store): State<SharedBookStore>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = path?;
    let id = parse_id(&id)?;

    let book = write_store(&store)?
        .delete(id)
        .ok_or(ApiError::BookNotFound)?;
    log_event_with_fields(Event::BookDeleted, &[("id", book.id.to_string().as_str())]);

    Ok(Json(book))
}

async fn endpoint_not_found_handler(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::endpoint_not_found(&method, uri.path())
}
