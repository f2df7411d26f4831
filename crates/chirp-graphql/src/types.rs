//! GraphQL object types wrapping the domain models.
//!
//! `User` and `Tweet` expose camelCase fields; `Movie` keeps the
//! provider's snake_case names on the wire, as the contract requires.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use chirp_store::Store;

/// A registered user.
pub struct User(chirp_store::User);

impl From<chirp_store::User> for User {
    fn from(user: chirp_store::User) -> Self {
        Self(user)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn first_name(&self) -> &str {
        &self.0.first_name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    /// The first and last name joined with a space.  Derived at
    /// resolution time, never stored.
    async fn full_name(&self) -> String {
        format!("{} {}", self.0.first_name, self.0.last_name)
    }
}

/// A short message posted by a user.
pub struct Tweet(chirp_store::Tweet);

impl From<chirp_store::Tweet> for Tweet {
    fn from(tweet: chirp_store::Tweet) -> Self {
        Self(tweet)
    }
}

#[Object]
impl Tweet {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    /// The tweet's author.  Nullable: the store validates the author
    /// reference at write time, but a dangling reference must resolve
    /// to null rather than fault the whole response.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.find_user(&self.0.author_id).await.map(User::from))
    }
}

/// One entry from the external catalog, provider-shaped.
pub struct Movie(chirp_catalog::Movie);

impl From<chirp_catalog::Movie> for Movie {
    fn from(movie: chirp_catalog::Movie) -> Self {
        Self(movie)
    }
}

#[Object(rename_fields = "snake_case")]
impl Movie {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn url(&self) -> &str {
        &self.0.url
    }

    async fn imdb_code(&self) -> &str {
        &self.0.imdb_code
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn title_english(&self) -> &str {
        &self.0.title_english
    }

    async fn title_long(&self) -> &str {
        &self.0.title_long
    }

    async fn slug(&self) -> &str {
        &self.0.slug
    }

    async fn year(&self) -> i32 {
        self.0.year
    }

    async fn rating(&self) -> f64 {
        self.0.rating
    }

    async fn runtime(&self) -> f64 {
        self.0.runtime
    }

    async fn genres(&self) -> &[String] {
        &self.0.genres
    }

    async fn summary(&self) -> Option<&str> {
        self.0.summary.as_deref()
    }

    async fn description_full(&self) -> &str {
        &self.0.description_full
    }

    async fn synopsis(&self) -> Option<&str> {
        self.0.synopsis.as_deref()
    }

    async fn yt_trailer_code(&self) -> &str {
        &self.0.yt_trailer_code
    }

    async fn language(&self) -> &str {
        &self.0.language
    }

    async fn background_image(&self) -> &str {
        &self.0.background_image
    }

    async fn background_image_original(&self) -> &str {
        &self.0.background_image_original
    }

    async fn small_cover_image(&self) -> &str {
        &self.0.small_cover_image
    }

    async fn medium_cover_image(&self) -> &str {
        &self.0.medium_cover_image
    }

    async fn large_cover_image(&self) -> &str {
        &self.0.large_cover_image
    }
}
