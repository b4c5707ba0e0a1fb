use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::client_read::ClientReader;
use crate::error::{AppError, AppResult};
use crate::models::ClientTripRow;

/// SQLite-specific implementation of ClientReader
pub struct SqliteClientReader {
    pool: SqlitePool,
}

impl SqliteClientReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientReader for SqliteClientReader {
    async fn client_exists(&self, client_id: i32) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE id = ?1")
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check client: {}", e)))?;

        Ok(count > 0)
    }

    async fn fetch_client_trip_rows(&self, client_id: i32) -> AppResult<Vec<ClientTripRow>> {
        let sql = r#"
            SELECT t.name AS trip_name, t.description, t.date_from, t.date_to, t.max_people,
                   ct.registered_at, ct.payment_date
            FROM client_trips ct
            JOIN trips t ON ct.trip_id = t.id
            WHERE ct.client_id = ?1
            ORDER BY ct.registered_at, t.id
        "#;

        sqlx::query_as::<_, ClientTripRow>(sql)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch client trips: {}", e)))
    }
}
