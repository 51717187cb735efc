//! Per-request database connection management.

use crate::config::DbSettings;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while acquiring a request connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection descriptor was never configured at startup.
    #[error("database connection is not configured")]
    NotConfigured,
    /// The connect call against the database failed.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Process-wide connection descriptor.
///
/// Read-only after startup and safe to share across requests. Each request
/// opens its own connection via [`Database::acquire`]; there is no pool and no
/// connection is ever shared between requests.
#[derive(Debug, Clone)]
pub struct Database {
    options: Option<PgConnectOptions>,
}

impl Database {
    /// Builds the descriptor from the configured secrets, if present.
    #[must_use]
    pub fn new(settings: Option<&DbSettings>) -> Self {
        let options = settings.map(|s| {
            PgConnectOptions::new()
                .host(&s.server)
                .database(&s.database)
                .username(&s.username)
                .password(&s.password)
        });
        Self { options }
    }

    /// Descriptor with no connection details; every acquire fails fast.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { options: None }
    }

    /// Whether the secrets were present at startup.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.options.is_some()
    }

    /// Opens a fresh connection for the current request.
    ///
    /// The caller owns the connection for the remainder of the request;
    /// dropping it closes it exactly once on every exit path, including early
    /// `?` returns. A failed connect is recorded for this request only — no
    /// retry, no process-wide circuit breaking.
    ///
    /// # Errors
    /// Fails fast with [`DbError::NotConfigured`] when the secrets were
    /// missing at startup, without attempting a network call. Returns
    /// [`DbError::Connect`] when the connect call itself fails.
    pub async fn acquire(&self) -> Result<PgConnection, DbError> {
        let options = self.options.as_ref().ok_or(DbError::NotConfigured)?;

        match options.connect().await {
            Ok(conn) => {
                debug!("opened database connection for request");
                Ok(conn)
            }
            Err(e) => {
                error!("failed to open database connection: {e}");
                Err(DbError::Connect(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_descriptor_reports_state() {
        let db = Database::unconfigured();
        assert!(!db.is_configured());

        let db = Database::new(None);
        assert!(!db.is_configured());
    }

    #[test]
    fn test_configured_descriptor_reports_state() {
        let settings = DbSettings {
            server: "db.internal".to_string(),
            database: "gas".to_string(),
            username: "svc".to_string(),
            password: "secret".to_string(),
        };

        let db = Database::new(Some(&settings));
        assert!(db.is_configured());
    }

    #[tokio::test]
    async fn test_acquire_fails_fast_without_descriptor() {
        let db = Database::unconfigured();

        match db.acquire().await {
            Err(DbError::NotConfigured) => {}
            other => panic!("expected NotConfigured, got {other:?}"),
        }
    }
}
