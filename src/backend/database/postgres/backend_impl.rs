use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    PostgresClientInserter, PostgresClientReader, PostgresRegistrationWriter, PostgresTripReader,
    UnifiedClientInsertOps, UnifiedClientReadOps, UnifiedRegistrationOps, UnifiedTripReadOps,
};
use crate::backend::{Backend, ClientBackend, RegistrationBackend, TripBackend};
use crate::error::{AppError, AppResult};
use crate::models::{ClientTrip, CreateClientRequest, Trip};

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    trip_read_ops: UnifiedTripReadOps<PostgresTripReader>,
    client_read_ops: UnifiedClientReadOps<PostgresClientReader>,
    client_insert_ops: UnifiedClientInsertOps<PostgresClientInserter>,
    registration_ops: UnifiedRegistrationOps<PostgresRegistrationWriter>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        // Create database-specific adapters
        let trip_reader = PostgresTripReader::new(pool.clone());
        let client_reader = PostgresClientReader::new(pool.clone());
        let client_inserter = PostgresClientInserter::new(pool.clone());
        let registration_writer = PostgresRegistrationWriter::new(pool.clone());

        Self {
            pool,
            trip_read_ops: UnifiedTripReadOps::new(trip_reader),
            client_read_ops: UnifiedClientReadOps::new(client_reader),
            client_insert_ops: UnifiedClientInsertOps::new(client_inserter),
            registration_ops: UnifiedRegistrationOps::new(registration_writer),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config.validate()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size())
            .acquire_timeout(config.timeout())
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

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
impl TripBackend for PostgresBackend {
    async fn list_trips(&self) -> AppResult<Vec<Trip>> {
        self.trip_read_ops.list_trips().await
    }
}

#[async_trait]
impl ClientBackend for PostgresBackend {
    async fn list_client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        self.client_read_ops.list_client_trips(client_id).await
    }

    async fn create_client(&self, request: &CreateClientRequest) -> AppResult<i32> {
        self.client_insert_ops.create_client(request).await
    }
}

#[async_trait]
impl RegistrationBackend for PostgresBackend {
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
