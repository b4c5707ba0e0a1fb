use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::AppState;
use crate::extractors::ApiJson;
use crate::models::{ClientTrip, CreateClientRequest, CreatedClient};
use crate::utils::client_location;

type HandlerError = (StatusCode, Json<Value>);

pub async fn list_client_trips(
    State((backend, _)): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<Json<Vec<ClientTrip>>, HandlerError> {
    backend
        .list_client_trips(client_id)
        .await
        .map(Json)
        .map_err(|e| e.to_response("An unexpected error occurred."))
}

pub async fn create_client(
    State((backend, app_config)): State<AppState>,
    ApiJson(payload): ApiJson<CreateClientRequest>,
) -> Result<Response, HandlerError> {
    let id = backend
        .create_client(&payload)
        .await
        .map_err(|e| e.to_response("An error occurred while creating the client."))?;

    let location = client_location(&app_config.server.base_path, id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedClient { id }),
    )
        .into_response())
}

pub async fn register_client_to_trip(
    State((backend, _)): State<AppState>,
    Path((client_id, trip_id)): Path<(i32, i32)>,
) -> Result<&'static str, HandlerError> {
    backend
        .register_client_to_trip(client_id, trip_id)
        .await
        .map_err(|e| e.to_response("An error occurred while registering the client."))?;

    Ok("Client successfully registered for the trip.")
}

pub async fn unregister_client_from_trip(
    State((backend, _)): State<AppState>,
    Path((client_id, trip_id)): Path<(i32, i32)>,
) -> Result<&'static str, HandlerError> {
    backend
        .unregister_client_from_trip(client_id, trip_id)
        .await
        .map_err(|e| e.to_response("An error occurred while unregistering the client."))?;

    Ok("Client successfully unregistered from the trip.")
}
