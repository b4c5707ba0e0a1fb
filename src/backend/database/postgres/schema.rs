use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Initialize the database schema for PostgreSQL
///
/// Creates trips, countries, clients and the two link tables with their
/// indexes. Safe to run on every startup.
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let tables = [
        (
            "trips",
            r#"
            CREATE TABLE IF NOT EXISTS trips (
                id SERIAL PRIMARY KEY,
                name VARCHAR(120) NOT NULL,
                description TEXT NOT NULL,
                date_from TIMESTAMP NOT NULL,
                date_to TIMESTAMP NOT NULL,
                max_people INTEGER NOT NULL CHECK (max_people >= 0)
            )
            "#,
        ),
        (
            "countries",
            r#"
            CREATE TABLE IF NOT EXISTS countries (
                id SERIAL PRIMARY KEY,
                name VARCHAR(120) NOT NULL
            )
            "#,
        ),
        (
            "country_trips",
            r#"
            CREATE TABLE IF NOT EXISTS country_trips (
                country_id INTEGER NOT NULL REFERENCES countries (id) ON DELETE CASCADE,
                trip_id INTEGER NOT NULL REFERENCES trips (id) ON DELETE CASCADE,
                PRIMARY KEY (country_id, trip_id)
            )
            "#,
        ),
        (
            "clients",
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(120) NOT NULL,
                last_name VARCHAR(120) NOT NULL,
                email VARCHAR(120) NOT NULL,
                telephone VARCHAR(120) NOT NULL,
                pesel CHAR(11) NOT NULL
            )
            "#,
        ),
        (
            "client_trips",
            r#"
            CREATE TABLE IF NOT EXISTS client_trips (
                client_id INTEGER NOT NULL REFERENCES clients (id) ON DELETE CASCADE,
                trip_id INTEGER NOT NULL REFERENCES trips (id) ON DELETE CASCADE,
                registered_at TIMESTAMPTZ NOT NULL,
                payment_date DATE,
                PRIMARY KEY (client_id, trip_id)
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
pub async fn seed_sample_data(pool: &PgPool) -> AppResult<()> {
    let statements = [
        r#"
        INSERT INTO countries (id, name) VALUES
            (1, 'Poland'), (2, 'Germany'), (3, 'Italy'), (4, 'Greece')
        ON CONFLICT DO NOTHING
        "#,
        r#"
        INSERT INTO trips (id, name, description, date_from, date_to, max_people) VALUES
            (1, 'Tatra Mountains', 'Hiking in the High Tatras', '2025-07-01 08:00:00', '2025-07-07 18:00:00', 20),
            (2, 'Central Europe', 'Berlin to Krakow by rail', '2025-08-10 08:00:00', '2025-08-20 18:00:00', 12),
            (3, 'Mediterranean', 'Island hopping', '2025-09-05 08:00:00', '2025-09-15 18:00:00', 8),
            (4, 'Surprise trip', 'Destination announced on departure', '2025-10-01 08:00:00', '2025-10-03 18:00:00', 4)
        ON CONFLICT DO NOTHING
        "#,
        r#"
        INSERT INTO country_trips (country_id, trip_id) VALUES
            (1, 1), (1, 2), (2, 2), (3, 3), (4, 3)
        ON CONFLICT DO NOTHING
        "#,
        // Explicit ids above bypass the sequences
        "SELECT setval(pg_get_serial_sequence('countries', 'id'), (SELECT MAX(id) FROM countries))",
        "SELECT setval(pg_get_serial_sequence('trips', 'id'), (SELECT MAX(id) FROM trips))",
    ];

    for sql in statements {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to seed sample data: {}", e)))?;
    }

    Ok(())
}
