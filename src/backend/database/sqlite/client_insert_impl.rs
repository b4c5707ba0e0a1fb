use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::client_insert::{ClientInserter, PreparedClientData};
use crate::error::{AppError, AppResult};

/// SQLite-specific implementation of ClientInserter
pub struct SqliteClientInserter {
    pool: SqlitePool,
}

impl SqliteClientInserter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientInserter for SqliteClientInserter {
    async fn execute_client_insert(&self, data: &PreparedClientData) -> AppResult<i32> {
        let result = sqlx::query(
            "INSERT INTO clients (first_name, last_name, email, telephone, pesel) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.telephone)
        .bind(&data.pesel)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create client: {}", e)))?;

        i32::try_from(result.last_insert_rowid())
            .map_err(|e| AppError::Database(format!("Client id out of range: {}", e)))
    }
}
