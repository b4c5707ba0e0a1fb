use crate::error::AppResult;
use crate::models::{ClientTrip, CreateClientRequest, Trip};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

/// Core backend abstraction
///
/// Connection lifecycle and schema bootstrap. Each storage implementation
/// (PostgreSQL, SQLite) implements this trait.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the tables if they do not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Insert a small set of trips and countries for local development
    async fn seed_sample_data(&self) -> AppResult<()>;
}

/// Trip catalogue operations
#[async_trait]
pub trait TripBackend: Backend {
    /// List every trip with its countries, ordered by trip id
    async fn list_trips(&self) -> AppResult<Vec<Trip>>;
}

/// Client operations
#[async_trait]
pub trait ClientBackend: Backend {
    /// List the trips a client is registered for
    async fn list_client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>>;

    /// Validate and insert a new client, returning its generated id
    async fn create_client(&self, request: &CreateClientRequest) -> AppResult<i32>;
}

/// Registration operations
///
/// Both operations run inside a single database transaction and leave no
/// partial writes behind on failure.
#[async_trait]
pub trait RegistrationBackend: Backend {
    async fn register_client_to_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()>;

    async fn unregister_client_from_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()>;
}

/// Combined backend interface used by the HTTP layer
pub trait TravelBackend: TripBackend + ClientBackend + RegistrationBackend {}

/// Automatic implementation for any type that implements all three traits
impl<T> TravelBackend for T where T: TripBackend + ClientBackend + RegistrationBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn TravelBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn TravelBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
