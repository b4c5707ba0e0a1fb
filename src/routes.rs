use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::backend::TravelBackend;
use crate::config::AppConfig;
use crate::logging::logging_middleware;
use crate::resource::{client, health, trip, AppState};
use crate::utils::normalize_base_path;

/// Build the application router.
///
/// API routes live under `server.base_path`; `/health` is always at the root.
pub fn build_router(backend: Arc<dyn TravelBackend>, app_config: Arc<AppConfig>) -> Router {
    let api: Router<AppState> = Router::new()
        .route("/trips", get(trip::list_trips))
        .route("/clients", post(client::create_client))
        .route("/clients/{id}/trips", get(client::list_client_trips))
        .route(
            "/clients/{id}/trips/{trip_id}",
            put(client::register_client_to_trip).delete(client::unregister_client_from_trip),
        );

    let base_path = normalize_base_path(&app_config.server.base_path);
    let app = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&base_path, api)
    };

    app.route("/health", get(health::health_check))
        .layer(middleware::from_fn(logging_middleware))
        .with_state((backend, app_config))
}
