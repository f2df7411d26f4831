//! Root mutation resolvers.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use chirp_store::Store;

use crate::types::Tweet;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a new tweet.
    ///
    /// Fails with a user-facing error when `userId` does not reference
    /// an existing user; the store is left untouched in that case.
    async fn post_tweet(&self, ctx: &Context<'_>, text: String, user_id: ID) -> Result<Tweet> {
        let store = ctx.data::<Arc<Store>>()?;
        let tweet = store.post_tweet(&text, user_id.as_str()).await?;
        Ok(Tweet::from(tweet))
    }

    /// Delete a tweet by id.  Returns `false` when no tweet has that
    /// id; deleting is never an error.
    async fn delete_tweet(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.delete_tweet(id.as_str()).await)
    }
}
