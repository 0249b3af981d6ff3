//! HTTP request handlers.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::Response,
};
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tokio::fs;
use tracing::debug;

use crate::state::AppState;

/// Fixed payload returned by the liveness endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Liveness probe handler.
///
/// Unconditionally reports the process as healthy; it carries no state and
/// must keep responding even when the static root is empty or missing.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is healthy.",
    })
}

/// Normalizes a request path into a relative path under the static root.
///
/// Empty and `.` segments collapse; any `..` segment rejects the whole
/// request so a crafted path can never escape the serving root.
pub fn sanitize_path(raw: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for segment in raw.trim_start_matches('/').split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment if segment.contains('\\') => return None,
            segment => clean.push(segment),
        }
    }
    Some(clean)
}

/// Handles static file requests with content-type detection
///
/// Key behaviors:
/// - Automatic index.html serving for directory requests (including `/`)
/// - MIME type detection from the file extension
/// - 404 for paths that are absent or fail sanitization
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let relative = sanitize_path(uri.path()).ok_or(StatusCode::NOT_FOUND)?;
    let mut file_path = state.static_dir.join(relative);

    if file_path.is_dir() {
        file_path.push("index.html");
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            let mut response = Response::new(Body::from(content));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime_type.as_ref())
                    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
            );
            Ok(response)
        }
        Err(_) => {
            debug!("No static file at {:?}", file_path);
            Err(StatusCode::NOT_FOUND)
        }
    }
}
