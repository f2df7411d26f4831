//! # chirp-store
//!
//! In-memory storage for the chirp service.
//!
//! The crate exposes a single [`Store`] that owns the user and tweet
//! collections for the lifetime of the process.  Nothing is persisted;
//! the server seeds the store at startup and all mutations happen
//! through the typed methods on `Store`.

pub mod models;
pub mod store;

mod error;

pub use error::StoreError;
pub use models::{Tweet, User};
pub use store::Store;
