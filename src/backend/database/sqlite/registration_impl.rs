use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::super::registration::{RegistrationProcessor, RegistrationWriter};
use crate::error::{AppError, AppResult};

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// SQLite-specific implementation of RegistrationWriter
///
/// Transactions open with `BEGIN IMMEDIATE`, taking the write lock before the
/// first read. Concurrent registrations wait on the busy timeout and each one
/// counts participants after the previous one committed.
pub struct SqliteRegistrationWriter {
    pool: SqlitePool,
}

impl SqliteRegistrationWriter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn register_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        client_id: i32,
        trip_id: i32,
        registered_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let client_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE id = ?1")
            .bind(client_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check client: {}", e)))?;
        RegistrationProcessor::ensure_client_exists(client_id, client_count)?;

        let max_people: Option<i32> =
            sqlx::query_scalar("SELECT max_people FROM trips WHERE id = ?1")
                .bind(trip_id)
                .fetch_optional(&mut **tx)
                .await
                .map_err(|e| AppError::Database(format!("Failed to check trip: {}", e)))?;
        let max_people = RegistrationProcessor::ensure_trip_exists(trip_id, max_people)?;

        let participants: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM client_trips WHERE trip_id = ?1")
                .bind(trip_id)
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| AppError::Database(format!("Failed to count participants: {}", e)))?;
        RegistrationProcessor::ensure_capacity(trip_id, participants, max_people)?;

        let existing = Self::count_registrations(tx, client_id, trip_id).await?;
        RegistrationProcessor::ensure_not_registered(client_id, trip_id, existing)?;

        sqlx::query(
            "INSERT INTO client_trips (client_id, trip_id, registered_at) VALUES (?1, ?2, ?3)",
        )
        .bind(client_id)
        .bind(trip_id)
        .bind(registered_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| RegistrationProcessor::map_insert_error(e, client_id, trip_id))?;

        Ok(())
    }

    async fn unregister_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        client_id: i32,
        trip_id: i32,
    ) -> AppResult<()> {
        let client_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE id = ?1")
            .bind(client_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check client: {}", e)))?;
        RegistrationProcessor::ensure_client_exists(client_id, client_count)?;

        let max_people: Option<i32> =
            sqlx::query_scalar("SELECT max_people FROM trips WHERE id = ?1")
                .bind(trip_id)
                .fetch_optional(&mut **tx)
                .await
                .map_err(|e| AppError::Database(format!("Failed to check trip: {}", e)))?;
        RegistrationProcessor::ensure_trip_exists(trip_id, max_people)?;

        let existing = Self::count_registrations(tx, client_id, trip_id).await?;
        RegistrationProcessor::ensure_registered(client_id, trip_id, existing)?;

        sqlx::query("DELETE FROM client_trips WHERE client_id = ?1 AND trip_id = ?2")
            .bind(client_id)
            .bind(trip_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete registration: {}", e)))?;

        Ok(())
    }

    async fn count_registrations(
        tx: &mut Transaction<'_, Sqlite>,
        client_id: i32,
        trip_id: i32,
    ) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM client_trips WHERE client_id = ?1 AND trip_id = ?2")
            .bind(client_id)
            .bind(trip_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check registration: {}", e)))
    }

    /// Commit on success, roll back and return the original error otherwise
    async fn finish(tx: Transaction<'_, Sqlite>, outcome: AppResult<()>) -> AppResult<()> {
        match outcome {
            Ok(()) => tx
                .commit()
                .await
                .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e))),
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "failed to roll back registration");
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl RegistrationWriter for SqliteRegistrationWriter {
    async fn execute_register(
        &self,
        client_id: i32,
        trip_id: i32,
        registered_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin_with(BEGIN_IMMEDIATE)
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let outcome =
            Self::register_in_transaction(&mut tx, client_id, trip_id, registered_at).await;
        Self::finish(tx, outcome).await
    }

    async fn execute_unregister(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin_with(BEGIN_IMMEDIATE)
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let outcome = Self::unregister_in_transaction(&mut tx, client_id, trip_id).await;
        Self::finish(tx, outcome).await
    }
}
