pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod resource;
pub mod routes;
pub mod startup;
pub mod utils;

// Re-export commonly used types for easier access
pub use models::{ClientTrip, Country, Trip};
pub use routes::build_router;
