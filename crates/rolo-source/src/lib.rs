// Error types
pub mod error;

// Wire schema for the generator endpoint
pub(crate) mod schema;

// Raw record -> domain contact mapping
pub(crate) mod mapper;

// Blocking HTTP client
pub mod client;

pub use client::{DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT, DEFAULT_NATIONALITY, RemoteSource};
pub use error::{Error, Result};
