use santa_core::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The config is loaded once at startup and injected here; handlers never
/// re-read it from disk.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(root: PathBuf, config: Arc<Config>) -> Self {
        Self { root, config }
    }
}
