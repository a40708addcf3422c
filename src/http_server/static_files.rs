//! Static assets and single-page-app fallback
//!
//! Any GET/HEAD outside `/api` is served from the static directory, with
//! `index.html` standing in for paths that have no file so client-side
//! routes load the app. Everything else gets the JSON 404.

use std::path::Path;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::rest_api::ApiError;

/// Prefix reserved for the REST API
pub const API_PREFIX: &str = "/api";

/// File service for the UI directory
pub type StaticAssets = ServeDir<ServeFile>;

/// Build the file service for `dir`, falling back to `index_file`
pub fn static_assets(dir: &Path, index_file: &Path) -> StaticAssets {
    ServeDir::new(dir).fallback(ServeFile::new(index_file))
}

pub fn is_api_path(path: &str) -> bool {
    path == API_PREFIX
        || path
            .strip_prefix(API_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Router fallback: static file, SPA entry point, or structured 404
pub async fn spa_fallback(assets: StaticAssets, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let servable = method == Method::GET || method == Method::HEAD;
    if !servable || is_api_path(&path) {
        return ApiError::endpoint_not_found(&method, &path).into_response();
    }

    let response = match assets.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    // index.html itself is missing
    if response.status() == StatusCode::NOT_FOUND {
        return ApiError::endpoint_not_found(&method, &path).into_response();
    }

    response.into_response()
}
