//! Root query resolvers.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use chirp_catalog::CatalogClient;
use chirp_store::Store;

use crate::types::{Movie, Tweet, User};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tweets in insertion order.
    async fn all_tweets(&self, ctx: &Context<'_>) -> Result<Vec<Tweet>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store
            .list_tweets()
            .await
            .into_iter()
            .map(Tweet::from)
            .collect())
    }

    /// A single tweet, or null when no tweet has that id.
    async fn tweet(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Tweet>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.find_tweet(id.as_str()).await.map(Tweet::from))
    }

    /// All registered users.
    async fn all_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store
            .list_users()
            .await
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// The external catalog's full movie list.  Provider failures
    /// surface as operation-level errors.
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let catalog = ctx.data::<Arc<CatalogClient>>()?;
        let movies = catalog.list_movies().await?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    /// A single catalog movie, or null when the provider has no match.
    async fn movie(&self, ctx: &Context<'_>, id: String) -> Result<Option<Movie>> {
        let catalog = ctx.data::<Arc<CatalogClient>>()?;
        Ok(catalog.get_movie(&id).await?.map(Movie::from))
    }
}
