//! PostgreSQL-specific database adapters

pub mod backend_impl;
pub mod client_insert_impl;
pub mod client_read_impl;
pub mod registration_impl;
pub mod schema;
pub mod trip_read_impl;

pub use backend_impl::PostgresBackend;
pub use client_insert_impl::PostgresClientInserter;
pub use client_read_impl::PostgresClientReader;
pub use registration_impl::PostgresRegistrationWriter;
pub use trip_read_impl::PostgresTripReader;
