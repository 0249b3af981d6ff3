//! Shared application state.

use std::path::PathBuf;

/// Shared application state accessible to all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonicalized root directory for static file serving
    pub static_dir: PathBuf,
}
