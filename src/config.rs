//! Configuration module, backed by the process environment.

use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Database connection secrets.
#[derive(Debug, Clone)]
pub struct DbSettings {
    /// Database host.
    pub server: String,
    /// Schema/catalog name.
    pub database: String,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
}

/// Runtime configuration assembled at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
    /// Database secrets; `None` degrades every database-backed endpoint to 503.
    pub database: Option<DbSettings>,
    /// Root of the prebuilt SPA bundle.
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads configuration from the process environment. A `.env` file is
    /// honored when present.
    ///
    /// Recognized variables: `SERVER`, `DATABASE`, `USERNAME`, `PASSWORD`
    /// (database secrets, all four required for the connection manager to
    /// function), `HOST` (default `0.0.0.0`), `PORT` (default `8080`) and
    /// `STATIC_DIR` (default `dist`). Missing secrets leave the server
    /// running with health and static routes intact.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");
        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()));

        let database = Self::db_settings_from_env();
        if database.is_none() {
            warn!(
                "database secrets missing (SERVER/DATABASE/USERNAME/PASSWORD); \
                 database-backed endpoints will respond 503"
            );
        }

        Self {
            host,
            port,
            database,
            static_dir,
        }
    }

    fn db_settings_from_env() -> Option<DbSettings> {
        Some(DbSettings {
            server: env::var("SERVER").ok()?,
            database: env::var("DATABASE").ok()?,
            username: env::var("USERNAME").ok()?,
            password: env::var("PASSWORD").ok()?,
        })
    }

    /// The address the HTTP listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database: None,
            static_dir: PathBuf::from("dist"),
        };

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
