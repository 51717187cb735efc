//! SPA static file fallback.

use crate::error::ApiError;
use crate::state::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

/// Serves the SPA bundle for any route the API router did not match.
///
/// Paths under `/api/` stay genuine 404s, as do missing assets whose final
/// segment carries a file extension. Everything else falls back to the SPA
/// entry document so client-side routed paths resolve.
pub async fn spa_fallback(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let path = request.uri().path().to_owned();

    if path == "/api" || path.starts_with("/api/") {
        return ApiError::NotFound(format!("No route for {path}")).into_response();
    }

    let has_extension = Path::new(&path).extension().is_some();

    let served = match ServeDir::new(&state.static_dir).oneshot(request).await {
        Ok(response) => response,
        Err(err) => match err {},
    };
    if served.status() != StatusCode::NOT_FOUND {
        return served.map(Body::new);
    }

    if has_extension {
        // A missing asset must not be masked by the SPA rewrite.
        return StatusCode::NOT_FOUND.into_response();
    }

    debug!("serving SPA index for {path}");
    serve_index(&state).await
}

/// Serves the SPA entry document.
async fn serve_index(state: &AppState) -> Response {
    let index = state.static_dir.join("index.html");
    let request = match axum::http::Request::builder().uri("/").body(Body::empty()) {
        Ok(request) => request,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    match ServeFile::new(index).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(err) => match err {},
    }
}
