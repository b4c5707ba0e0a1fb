use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult, Entity};

/// Database-specific adapter for registration writes
///
/// Implementations run every check and the final write on one transaction
/// and roll it back when any check fails.
#[async_trait]
pub trait RegistrationWriter: Send + Sync {
    async fn execute_register(
        &self,
        client_id: i32,
        trip_id: i32,
        registered_at: DateTime<Utc>,
    ) -> AppResult<()>;

    async fn execute_unregister(&self, client_id: i32, trip_id: i32) -> AppResult<()>;
}

/// Shared business rules for registrations
///
/// Each check takes the value the adapter read inside its transaction.
pub struct RegistrationProcessor;

impl RegistrationProcessor {
    pub fn ensure_client_exists(client_id: i32, client_count: i64) -> AppResult<()> {
        if client_count == 0 {
            return Err(AppError::NotFound(Entity::Client(client_id)));
        }
        Ok(())
    }

    /// Returns the trip capacity
    pub fn ensure_trip_exists(trip_id: i32, max_people: Option<i32>) -> AppResult<i32> {
        max_people.ok_or(AppError::NotFound(Entity::Trip(trip_id)))
    }

    pub fn ensure_capacity(trip_id: i32, participants: i64, max_people: i32) -> AppResult<()> {
        if participants >= i64::from(max_people) {
            return Err(AppError::CapacityExceeded {
                trip_id,
                max_people,
            });
        }
        Ok(())
    }

    pub fn ensure_not_registered(
        client_id: i32,
        trip_id: i32,
        registration_count: i64,
    ) -> AppResult<()> {
        if registration_count > 0 {
            return Err(AppError::DuplicateRegistration { client_id, trip_id });
        }
        Ok(())
    }

    pub fn ensure_registered(client_id: i32, trip_id: i32, registration_count: i64) -> AppResult<()> {
        if registration_count == 0 {
            return Err(AppError::NotFound(Entity::Registration { client_id, trip_id }));
        }
        Ok(())
    }

    /// Map an insert failure, treating a primary key clash as a duplicate
    pub fn map_insert_error(error: sqlx::Error, client_id: i32, trip_id: i32) -> AppError {
        let error_str = error.to_string();
        if error_str.contains("duplicate key") || error_str.contains("UNIQUE constraint") {
            AppError::DuplicateRegistration { client_id, trip_id }
        } else {
            AppError::Database(format!("Failed to insert registration: {}", error_str))
        }
    }
}

/// Unified registration operations using the adapter pattern
pub struct UnifiedRegistrationOps<T: RegistrationWriter> {
    writer: T,
}

impl<T: RegistrationWriter> UnifiedRegistrationOps<T> {
    pub fn new(writer: T) -> Self {
        Self { writer }
    }

    pub async fn register_client_to_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        let registered_at = Utc::now();

        match self
            .writer
            .execute_register(client_id, trip_id, registered_at)
            .await
        {
            Ok(()) => {
                tracing::info!(client_id, trip_id, "registered client for trip");
                Ok(())
            }
            Err(e) => {
                tracing::info!(client_id, trip_id, error = %e, "registration rejected");
                Err(e)
            }
        }
    }

    pub async fn unregister_client_from_trip(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        match self.writer.execute_unregister(client_id, trip_id).await {
            Ok(()) => {
                tracing::info!(client_id, trip_id, "unregistered client from trip");
                Ok(())
            }
            Err(e) => {
                tracing::info!(client_id, trip_id, error = %e, "unregistration rejected");
                Err(e)
            }
        }
    }
}
