//! # chirp-graphql
//!
//! The resolution layer: GraphQL roots, object types and field
//! resolvers mapping the schema onto the store and the catalog client.
//!
//! The schema itself carries no logic.  Resolvers are stateless; every
//! invocation reads or writes the shared [`Store`](chirp_store::Store)
//! or calls the [`CatalogClient`](chirp_catalog::CatalogClient), both
//! injected as schema data at build time.

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use chirp_catalog::CatalogClient;
use chirp_store::Store;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema served by the front door.
pub type ChirpSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a store and a catalog client.
///
/// Both collaborators are passed in explicitly so tests can build a
/// schema over isolated fixtures.
pub fn build_schema(store: Arc<Store>, catalog: Arc<CatalogClient>) -> ChirpSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(catalog)
        .finish()
}
