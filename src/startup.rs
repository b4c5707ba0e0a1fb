use std::sync::Arc;

use crate::backend::{BackendFactory, TravelBackend};
use crate::config::AppConfig;
use crate::error::AppResult;

/// Connect the configured backend and make sure its schema exists
pub async fn initialize_backend(config: &AppConfig) -> AppResult<Arc<dyn TravelBackend>> {
    let backend_config = config.database.to_backend_config()?;

    let backend = BackendFactory::create(&backend_config).await?;
    backend.init_schema().await?;
    tracing::info!(database = %config.database.db_type, "schema initialized");

    if config.database.seed_sample_data {
        backend.seed_sample_data().await?;
        tracing::info!("sample trips loaded");
    }

    Ok(backend)
}
