use async_trait::async_trait;
use sqlx::PgPool;

use super::super::client_insert::{ClientInserter, PreparedClientData};
use crate::error::{AppError, AppResult};

/// PostgreSQL-specific implementation of ClientInserter
pub struct PostgresClientInserter {
    pool: PgPool,
}

impl PostgresClientInserter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientInserter for PostgresClientInserter {
    async fn execute_client_insert(&self, data: &PreparedClientData) -> AppResult<i32> {
        sqlx::query_scalar(
            "INSERT INTO clients (first_name, last_name, email, telephone, pesel) VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.telephone)
        .bind(&data.pesel)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create client: {}", e)))
    }
}
