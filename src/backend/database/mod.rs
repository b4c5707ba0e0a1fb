//! Database abstraction layer
//!
//! Shared business logic lives in the `*_read`, `*_insert` and
//! `registration` modules; each database gets a thin adapter that only
//! knows how to talk SQL.
//!
//! # Architecture
//!
//! ```text
//! Common Logic (trip_read.rs, client_read.rs, client_insert.rs, registration.rs)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod client_insert;
pub mod client_read;
pub mod config;
pub mod postgres;
pub mod registration;
pub mod sqlite;
pub mod trip_read;

// Re-export key types for convenience
pub use config::DatabaseBackendConfig;

pub use client_insert::UnifiedClientInsertOps;

pub use client_read::UnifiedClientReadOps;

pub use registration::UnifiedRegistrationOps;

pub use trip_read::UnifiedTripReadOps;

pub use postgres::{
    PostgresBackend, PostgresClientInserter, PostgresClientReader, PostgresRegistrationWriter,
    PostgresTripReader,
};
pub use sqlite::{
    SqliteBackend, SqliteClientInserter, SqliteClientReader, SqliteRegistrationWriter,
    SqliteTripReader,
};
