use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Country, Trip, TripCountryRow};

/// Database-specific adapter for trip READ operations
#[async_trait]
pub trait TripReader: Send + Sync {
    /// Run the trips × countries left join ordered by trip id
    async fn fetch_trip_country_rows(&self) -> AppResult<Vec<TripCountryRow>>;
}

/// Shared business logic for trip READ operations
pub struct TripReadProcessor;

impl TripReadProcessor {
    /// Fold flat join rows into trips with nested countries.
    ///
    /// Rows must arrive grouped by trip id. A new trip starts whenever the id
    /// changes; every row with a non-null country adds one country to the
    /// current trip, so a trip without countries still yields one entry.
    pub fn group_trip_rows(rows: Vec<TripCountryRow>) -> Vec<Trip> {
        let mut trips: Vec<Trip> = Vec::new();
        let mut current_trip_id: Option<i32> = None;

        for row in rows {
            if current_trip_id != Some(row.trip_id) {
                current_trip_id = Some(row.trip_id);
                trips.push(Trip {
                    id: row.trip_id,
                    name: row.name,
                    description: row.description,
                    date_from: row.date_from,
                    date_to: row.date_to,
                    max_people: row.max_people,
                    countries: Vec::new(),
                });
            }

            if let (Some(name), Some(trip)) = (row.country_name, trips.last_mut()) {
                trip.countries.push(Country { name });
            }
        }

        trips
    }
}

/// Unified trip READ operations using the adapter pattern
pub struct UnifiedTripReadOps<T: TripReader> {
    reader: T,
}

impl<T: TripReader> UnifiedTripReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    pub async fn list_trips(&self) -> AppResult<Vec<Trip>> {
        let rows = self.reader.fetch_trip_country_rows().await?;
        let row_count = rows.len();
        let trips = TripReadProcessor::group_trip_rows(rows);

        tracing::debug!(rows = row_count, trips = trips.len(), "listed trips");
        Ok(trips)
    }
}
