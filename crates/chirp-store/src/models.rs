//! Domain model structs held by the in-memory store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the GraphQL layer or dumped for debugging.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user.  Users are seeded at process start and are
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

// ---------------------------------------------------------------------------
// Tweet
// ---------------------------------------------------------------------------

/// A single short message.
///
/// `author_id` references a [`User::id`].  The store validates the
/// reference when a tweet is posted, but readers must still tolerate a
/// missing author and resolve it as an absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    /// Unique tweet identifier.
    pub id: String,
    /// The message body.
    pub text: String,
    /// Id of the user who posted this tweet.
    pub author_id: String,
}
