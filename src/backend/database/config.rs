//! Connection settings handed to a storage backend

use std::time::Duration;

use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the trip database
///
/// Derived from the `database` section of the YAML config at startup. The
/// timeout bounds both pool acquisition and, on SQLite, the wait for the
/// write lock held by a concurrent registration.
#[derive(Debug, Clone)]
pub struct DatabaseBackendConfig {
    pub database_type: DatabaseType,

    /// `postgresql://...`, `sqlite:trips.db`, a bare `.db` path or `:memory:`
    pub connection_url: String,

    pub max_connections: u32,

    /// Seconds
    pub connection_timeout: u64,
}

impl DatabaseBackendConfig {
    pub fn new(database_type: DatabaseType, connection_url: impl Into<String>) -> Self {
        Self {
            database_type,
            connection_url: connection_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connection_timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn postgres(connection_url: impl Into<String>) -> Self {
        Self::new(DatabaseType::PostgreSQL, connection_url)
    }

    pub fn sqlite(connection_url: impl Into<String>) -> Self {
        Self::new(DatabaseType::SQLite, connection_url)
    }

    /// Private in-memory catalogue, used by tests and the zero-config default
    pub fn memory_sqlite() -> Self {
        Self::sqlite(":memory:").with_max_connections(1)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_connection_timeout(mut self, timeout_seconds: u64) -> Self {
        self.connection_timeout = timeout_seconds;
        self
    }

    pub fn is_memory_database(&self) -> bool {
        self.connection_url == ":memory:" || self.connection_url == "sqlite::memory:"
    }

    /// Number of pooled connections to open
    ///
    /// Every connection to an in-memory SQLite database sees its own empty
    /// catalogue, so those pools are pinned to one connection.
    pub fn pool_size(&self) -> u32 {
        if self.database_type == DatabaseType::SQLite && self.is_memory_database() {
            1
        } else {
            self.max_connections
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    /// Reject settings no backend could connect with
    pub fn validate(&self) -> AppResult<()> {
        let invalid = |reason: &str| {
            Err(AppError::Configuration(format!(
                "Invalid backend config: {}",
                reason
            )))
        };

        if self.connection_url.is_empty() {
            return invalid("connection URL cannot be empty");
        }
        if self.max_connections == 0 {
            return invalid("max connections must be greater than 0");
        }

        let url = self.connection_url.as_str();
        match self.database_type {
            DatabaseType::PostgreSQL
                if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) =>
            {
                invalid("PostgreSQL URL must start with 'postgres://' or 'postgresql://'")
            }
            DatabaseType::SQLite
                if !(url.starts_with("sqlite:")
                    || url == ":memory:"
                    || url.ends_with(".db")
                    || url.ends_with(".sqlite")) =>
            {
                invalid("SQLite URL must start with 'sqlite:', be ':memory:', or name a .db/.sqlite file")
            }
            _ => Ok(()),
        }
    }
}
