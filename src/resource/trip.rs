use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use super::AppState;
use crate::models::Trip;

pub async fn list_trips(
    State((backend, _)): State<AppState>,
) -> Result<Json<Vec<Trip>>, (StatusCode, Json<Value>)> {
    backend
        .list_trips()
        .await
        .map(Json)
        .map_err(|e| e.to_response("An error occurred while fetching trip data."))
}
