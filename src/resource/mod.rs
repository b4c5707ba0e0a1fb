use std::sync::Arc;

use crate::backend::TravelBackend;
use crate::config::AppConfig;

pub mod client;
pub mod health;
pub mod trip;

/// Shared state handed to every handler
pub type AppState = (Arc<dyn TravelBackend>, Arc<AppConfig>);
