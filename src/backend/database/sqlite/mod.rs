//! SQLite-specific database adapters

pub mod backend_impl;
pub mod client_insert_impl;
pub mod client_read_impl;
pub mod registration_impl;
pub mod schema;
pub mod trip_read_impl;

pub use backend_impl::SqliteBackend;
pub use client_insert_impl::SqliteClientInserter;
pub use client_read_impl::SqliteClientReader;
pub use registration_impl::SqliteRegistrationWriter;
pub use trip_read_impl::SqliteTripReader;
