//! The in-memory store and its mutation surface.

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::models::{Tweet, User};

/// Collections guarded by the store lock.
#[derive(Debug)]
struct Collections {
    users: Vec<User>,
    tweets: Vec<Tweet>,
    /// Next tweet id.  Monotonic so ids stay unique even after
    /// deletions; recomputing from the collection length would collide.
    next_id: u64,
}

/// The authoritative in-process holder of users and tweets.
///
/// A single instance is created at startup and shared behind an `Arc`.
/// Reads clone the requested records out of the lock; mutations hold
/// the write guard for a synchronous critical section and run to
/// completion, so two mutations can never interleave.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Collections>,
}

impl Store {
    /// Create a store over the given collections.
    ///
    /// The id counter starts past the highest numeric tweet id so that
    /// seeded ids and generated ids never collide.
    pub fn with_seed(users: Vec<User>, tweets: Vec<Tweet>) -> Self {
        let next_id = tweets
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: RwLock::new(Collections {
                users,
                tweets,
                next_id,
            }),
        }
    }

    /// The default startup data set: two users and two tweets.
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: "1".to_string(),
                first_name: "Hyunju".to_string(),
                last_name: "Kim".to_string(),
            },
            User {
                id: "2".to_string(),
                first_name: "Andy".to_string(),
                last_name: "Kim".to_string(),
            },
        ];

        let tweets = vec![
            Tweet {
                id: "1".to_string(),
                text: "first one".to_string(),
                author_id: "2".to_string(),
            },
            Tweet {
                id: "2".to_string(),
                text: "second one".to_string(),
                author_id: "1".to_string(),
            },
        ];

        Self::with_seed(users, tweets)
    }

    /// All tweets in insertion order.
    pub async fn list_tweets(&self) -> Vec<Tweet> {
        self.inner.read().await.tweets.clone()
    }

    /// Look up a single tweet by id.
    pub async fn find_tweet(&self, id: &str) -> Option<Tweet> {
        self.inner
            .read()
            .await
            .tweets
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// All users.  No ordering is guaranteed.
    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Look up a single user by id.
    pub async fn find_user(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    /// Append a new tweet.
    ///
    /// Fails with [`StoreError::UnknownAuthor`] if `author_id` does not
    /// reference an existing user; in that case the store is left
    /// untouched.
    pub async fn post_tweet(&self, text: &str, author_id: &str) -> Result<Tweet> {
        let mut inner = self.inner.write().await;

        if !inner.users.iter().any(|u| u.id == author_id) {
            return Err(StoreError::UnknownAuthor(author_id.to_string()));
        }

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let tweet = Tweet {
            id,
            text: text.to_string(),
            author_id: author_id.to_string(),
        };
        inner.tweets.push(tweet.clone());

        info!(id = %tweet.id, author = %tweet.author_id, "Tweet posted");
        Ok(tweet)
    }

    /// Remove a tweet by id.
    ///
    /// Returns `false` when no tweet has that id; this is not an error.
    /// The insertion order of the remaining tweets is preserved.
    pub async fn delete_tweet(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;

        let before = inner.tweets.len();
        inner.tweets.retain(|t| t.id != id);
        let deleted = inner.tweets.len() < before;

        if deleted {
            info!(%id, "Tweet deleted");
        } else {
            debug!(%id, "Delete requested for unknown tweet id");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store {
        Store::with_seed(
            vec![User {
                id: "1".to_string(),
                first_name: "Hyunju".to_string(),
                last_name: "Kim".to_string(),
            }],
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn post_appends_in_order() {
        let store = test_store();

        let tweet = store.post_tweet("hello", "1").await.unwrap();
        assert_eq!(tweet.text, "hello");
        assert_eq!(tweet.author_id, "1");

        let all = store.list_tweets().await;
        assert_eq!(all, vec![tweet]);
    }

    #[tokio::test]
    async fn post_unknown_author_leaves_store_unchanged() {
        let store = test_store();
        let before = store.list_tweets().await;

        let err = store.post_tweet("hello", "404").await.unwrap_err();
        assert_eq!(err, StoreError::UnknownAuthor("404".to_string()));
        assert_eq!(store.list_tweets().await, before);
    }

    #[tokio::test]
    async fn ids_stay_unique_after_deletion() {
        let store = test_store();

        let a = store.post_tweet("a", "1").await.unwrap();
        let b = store.post_tweet("b", "1").await.unwrap();
        assert!(store.delete_tweet(&b.id).await);

        // The old strategy (collection length + 1) would reuse b's id here.
        let c = store.post_tweet("c", "1").await.unwrap();
        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
    }

    #[tokio::test]
    async fn seeded_ids_never_collide_with_generated_ones() {
        let store = Store::seeded();

        let tweet = store.post_tweet("third one", "1").await.unwrap();
        let ids: Vec<String> = store.list_tweets().await.into_iter().map(|t| t.id).collect();

        assert_eq!(ids.iter().filter(|id| **id == tweet.id).count(), 1);
        assert_eq!(ids, vec!["1".to_string(), "2".to_string(), tweet.id]);
    }

    #[tokio::test]
    async fn delete_twice_reports_absence_second_time() {
        let store = test_store();
        let tweet = store.post_tweet("bye", "1").await.unwrap();

        assert!(store.delete_tweet(&tweet.id).await);
        assert!(!store.delete_tweet(&tweet.id).await);
        assert!(store.list_tweets().await.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_no_op() {
        let store = test_store();
        store.post_tweet("keep me", "1").await.unwrap();
        let before = store.list_tweets().await;

        assert!(!store.delete_tweet("404").await);
        assert_eq!(store.list_tweets().await, before);
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remainder() {
        let store = test_store();
        let a = store.post_tweet("a", "1").await.unwrap();
        let b = store.post_tweet("b", "1").await.unwrap();
        let c = store.post_tweet("c", "1").await.unwrap();

        assert!(store.delete_tweet(&b.id).await);
        assert_eq!(store.list_tweets().await, vec![a, c]);
    }

    #[tokio::test]
    async fn find_user_and_tweet_by_id() {
        let store = Store::seeded();

        let user = store.find_user("1").await.unwrap();
        assert_eq!(user.first_name, "Hyunju");
        assert_eq!(user.last_name, "Kim");
        assert!(store.find_user("404").await.is_none());

        let tweet = store.find_tweet("2").await.unwrap();
        assert_eq!(tweet.text, "second one");
        assert!(store.find_tweet("404").await.is_none());
    }

    #[tokio::test]
    async fn repeated_reads_are_identical_without_mutation() {
        let store = Store::seeded();

        assert_eq!(store.list_tweets().await, store.list_tweets().await);
        assert_eq!(store.list_users().await, store.list_users().await);
    }
}
