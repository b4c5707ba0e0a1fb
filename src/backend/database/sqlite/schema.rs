use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Initialize the database schema for SQLite
///
/// Creates trips, countries, clients and the two link tables with their
/// indexes. Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let tables = [
        (
            "trips",
            r#"
            CREATE TABLE IF NOT EXISTS trips (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                date_from DATETIME NOT NULL,
                date_to DATETIME NOT NULL,
                max_people INTEGER NOT NULL CHECK (max_people >= 0)
            )
            "#,
        ),
        (
            "countries",
            r#"
            CREATE TABLE IF NOT EXISTS countries (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        ),
        (
            "country_trips",
            r#"
            CREATE TABLE IF NOT EXISTS country_trips (
                country_id INTEGER NOT NULL,
                trip_id INTEGER NOT NULL,
                PRIMARY KEY (country_id, trip_id),
                FOREIGN KEY (country_id) REFERENCES countries (id) ON DELETE CASCADE,
                FOREIGN KEY (trip_id) REFERENCES trips (id) ON DELETE CASCADE
            )
            "#,
        ),
        (
            "clients",
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL,
                telephone TEXT NOT NULL,
                pesel TEXT NOT NULL
            )
            "#,
        ),
        (
            "client_trips",
            r#"
            CREATE TABLE IF NOT EXISTS client_trips (
                client_id INTEGER NOT NULL,
                trip_id INTEGER NOT NULL,
                registered_at DATETIME NOT NULL,
                payment_date DATE,
                PRIMARY KEY (client_id, trip_id),
                FOREIGN KEY (client_id) REFERENCES clients (id) ON DELETE CASCADE,
                FOREIGN KEY (trip_id) REFERENCES trips (id) ON DELETE CASCADE
            )
            "#,
        ),
    ];

    for (table, sql) in tables {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create {} table: {}", table, e)))?;
    }

    create_indexes(pool).await?;

    Ok(())
}

/// Create indexes for the link tables
async fn create_indexes(pool: &SqlitePool) -> AppResult<()> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_country_trips_trip_id ON country_trips (trip_id)",
        "CREATE INDEX IF NOT EXISTS idx_client_trips_trip_id ON client_trips (trip_id)",
    ];

    for sql in indexes {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create index: {}", e)))?;
    }

    Ok(())
}

/// Insert sample countries and trips
pub async fn seed_sample_data(pool: &SqlitePool) -> AppResult<()> {
    let statements = [
        r#"
        INSERT OR IGNORE INTO countries (id, name) VALUES
            (1, 'Poland'), (2, 'Germany'), (3, 'Italy'), (4, 'Greece')
        "#,
        r#"
        INSERT OR IGNORE INTO trips (id, name, description, date_from, date_to, max_people) VALUES
            (1, 'Tatra Mountains', 'Hiking in the High Tatras', '2025-07-01 08:00:00', '2025-07-07 18:00:00', 20),
            (2, 'Central Europe', 'Berlin to Krakow by rail', '2025-08-10 08:00:00', '2025-08-20 18:00:00', 12),
            (3, 'Mediterranean', 'Island hopping', '2025-09-05 08:00:00', '2025-09-15 18:00:00', 8),
            (4, 'Surprise trip', 'Destination announced on departure', '2025-10-01 08:00:00', '2025-10-03 18:00:00', 4)
        "#,
        r#"
        INSERT OR IGNORE INTO country_trips (country_id, trip_id) VALUES
            (1, 1), (1, 2), (2, 2), (3, 3), (4, 3)
        "#,
    ];

    for sql in statements {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to seed sample data: {}", e)))?;
    }

    Ok(())
}
