//! Application state management.

use crate::config::Config;
use crate::db::Database;
use std::path::PathBuf;

/// Application state shared across all handlers.
///
/// Read-only after startup; the only mutable resource per request is the
/// database connection each handler acquires for itself.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection descriptor; each request opens its own connection.
    pub db: Database,
    /// Root of the prebuilt SPA bundle.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates state from its parts.
    #[must_use]
    pub fn new(db: Database, static_dir: PathBuf) -> Self {
        Self { db, static_dir }
    }

    /// Assembles state from startup configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            db: Database::new(config.database.as_ref()),
            static_dir: config.static_dir.clone(),
        }
    }
}
