// Shared request-handling state
// Built once at startup, read by every connection

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use tokio::sync::RwLock;

use super::Config;
use crate::app::App;

/// State shared across all connections
pub struct AppState {
    pub config: Config,
    /// Document root, canonicalised at startup
    pub document_root: PathBuf,
    /// Bootstrapped application (project root + manifest)
    pub app: App,
    /// Rendered welcome page, cached after the first render
    pub welcome_cache: RwLock<Option<String>>,
    /// Cached flag for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, document_root: PathBuf, app: App) -> Self {
        let access_log = config.logging.access_log;
        Self {
            config,
            document_root,
            app,
            welcome_cache: RwLock::new(None),
            cached_access_log: AtomicBool::new(access_log),
        }
    }
}
