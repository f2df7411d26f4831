//! # chirp-catalog
//!
//! Read-only adapter for the external movie-catalog service.
//!
//! The provider wraps every payload in a `{ "data": { ... } }` envelope
//! with its own field names; this crate unwraps that envelope at the
//! boundary and hands strictly typed [`Movie`] records to the rest of
//! the system.  Movies are never stored locally; every lookup is a
//! fresh request.

pub mod client;
pub mod models;

mod error;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use models::Movie;
