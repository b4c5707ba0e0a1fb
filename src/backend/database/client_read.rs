use async_trait::async_trait;

use crate::error::{AppError, AppResult, Entity};
use crate::models::{ClientTrip, ClientTripRow};
use crate::utils::format_iso_date;

/// Database-specific adapter for client READ operations
#[async_trait]
pub trait ClientReader: Send + Sync {
    /// Existence probe for a client id
    async fn client_exists(&self, client_id: i32) -> AppResult<bool>;

    /// Registrations of one client joined with their trips
    async fn fetch_client_trip_rows(&self, client_id: i32) -> AppResult<Vec<ClientTripRow>>;
}

/// Shared business logic for client READ operations
pub struct ClientReadProcessor;

impl ClientReadProcessor {
    pub fn to_client_trip(row: ClientTripRow) -> ClientTrip {
        ClientTrip {
            trip_name: row.trip_name,
            description: row.description,
            date_from: row.date_from,
            date_to: row.date_to,
            max_people: row.max_people,
            registered_at: row.registered_at,
            payment_date: row.payment_date.map(format_iso_date),
        }
    }
}

/// Unified client READ operations using the adapter pattern
pub struct UnifiedClientReadOps<T: ClientReader> {
    reader: T,
}

impl<T: ClientReader> UnifiedClientReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// List the trips of a client; the main query only runs once the client
    /// is known to exist.
    pub async fn list_client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        if !self.reader.client_exists(client_id).await? {
            return Err(AppError::NotFound(Entity::Client(client_id)));
        }

        let rows = self.reader.fetch_client_trip_rows(client_id).await?;

        Ok(rows
            .into_iter()
            .map(ClientReadProcessor::to_client_trip)
            .collect())
    }
}
