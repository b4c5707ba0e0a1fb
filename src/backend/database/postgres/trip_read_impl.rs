use async_trait::async_trait;
use sqlx::PgPool;

use super::super::trip_read::TripReader;
use crate::error::{AppError, AppResult};
use crate::models::TripCountryRow;

/// PostgreSQL-specific implementation of TripReader
pub struct PostgresTripReader {
    pool: PgPool,
}

impl PostgresTripReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripReader for PostgresTripReader {
    async fn fetch_trip_country_rows(&self) -> AppResult<Vec<TripCountryRow>> {
        let sql = r#"
            SELECT t.id AS trip_id, t.name, t.description, t.date_from, t.date_to, t.max_people,
                   c.name AS country_name
            FROM trips t
            LEFT JOIN country_trips ct ON t.id = ct.trip_id
            LEFT JOIN countries c ON ct.country_id = c.id
            ORDER BY t.id, c.id
        "#;

        sqlx::query_as::<_, TripCountryRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch trips: {}", e)))
    }
}
