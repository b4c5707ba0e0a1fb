use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    SqliteClientInserter, SqliteClientReader, SqliteRegistrationWriter, SqliteTripReader,
    UnifiedClientInsertOps, UnifiedClientReadOps, UnifiedRegistrationOps, UnifiedTripReadOps,
};
use crate::backend::{Backend, ClientBackend, RegistrationBackend, TripBackend};
use crate::error::{AppError, AppResult};
use crate::models::{ClientTrip, CreateClientRequest, Trip};

/// SQLite database backend implementation
pub struct SqliteBackend {
    pool: SqlitePool,
    trip_read_ops: UnifiedTripReadOps<SqliteTripReader>,
    client_read_ops: UnifiedClientReadOps<SqliteClientReader>,
    client_insert_ops: UnifiedClientInsertOps<SqliteClientInserter>,
    registration_ops: UnifiedRegistrationOps<SqliteRegistrationWriter>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            trip_read_ops: UnifiedTripReadOps::new(SqliteTripReader::new(pool.clone())),
            client_read_ops: UnifiedClientReadOps::new(SqliteClientReader::new(pool.clone())),
            client_insert_ops: UnifiedClientInsertOps::new(SqliteClientInserter::new(pool.clone())),
            registration_ops: UnifiedRegistrationOps::new(SqliteRegistrationWriter::new(
                pool.clone(),
            )),
            pool,
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config.validate()?;

        let connect_options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(config.timeout());

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.pool_size())
            .acquire_timeout(config.timeout());

        // Closing the only connection would drop the in-memory database
        if config.is_memory_database() {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn seed_sample_data(&self) -> AppResult<()> {
        super::schema::seed_sample_data(&self.pool).await
    }
}

#[async_trait]
impl TripBackend for SqliteBackend {
    async fn list_trips(&self) -> AppResult<Vec<Trip>> {
        self.trip_read_ops.list_trips().await
    }
}

#[async_trait]
impl ClientBackend for SqliteBackend {
    async fn list_client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        self.client_read_ops.list_client_trips(client_id).await
    }

    async fn create_client(&self, request: &CreateClientRequest) -> AppResult<i32> {
        self.client_insert_ops.create_client(request).await
    }
}

#[async_trait]
impl RegistrationBackend for SqliteBackend {
    async fn register_client_to_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        self.registration_ops
            .register_client_to_trip(client_id, trip_id)
            .await
    }

    async fn unregister_client_from_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        self.registration_ops
            .unregister_client_from_trip(client_id, trip_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_connects_and_seeds() {
        let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory_sqlite())
            .await
            .unwrap();
        backend.health_check().await.unwrap();
        backend.init_schema().await.unwrap();
        backend.seed_sample_data().await.unwrap();

        let trips = backend.list_trips().await.unwrap();

        assert_eq!(trips.len(), 4);
        assert_eq!(trips[1].countries.len(), 2);
        assert!(trips[3].countries.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = DatabaseBackendConfig::sqlite("not-a-database".to_string());

        let result = SqliteBackend::connect(&config).await;

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
