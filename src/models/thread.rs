use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    models::{null_default, post::Post, user::User, Envelope, Normalize},
    params::Params,
    result::Result,
    time, Client,
};

impl Client {
    /// Lists threads, filtered by `params` (e.g. [`Params::forum`]).
    ///
    /// Wraps `threads/list`. The `related` parameter is not supported.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the API answers with a non-200 status,
    /// or the body or a timestamp in it cannot be decoded.
    pub async fn thread_list(&self, params: &Params) -> Result<Envelope<Vec<Thread>>> {
        let query = self.query(params);
        self.get(&self.endpoints().threads.list, &query).await
    }

    /// Details of a single thread.
    ///
    /// Wraps `threads/details`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `thread` is empty, otherwise as [`Client::thread_list`].
    ///
    /// [`Error::Validation`]: crate::Error::Validation
    pub async fn thread_details(&self, thread: &str, params: &Params) -> Result<Envelope<ThreadDetail>> {
        let query = self.query_with_id(params, "thread", thread)?;
        self.get(&self.endpoints().threads.details, &query).await
    }

    /// Posts of a thread.
    ///
    /// Wraps `threads/listPosts`.
    ///
    /// # Errors
    ///
    /// As [`Client::thread_details`].
    pub async fn thread_posts(&self, thread: &str, params: &Params) -> Result<Envelope<Vec<Post>>> {
        let query = self.query_with_id(params, "thread", thread)?;
        self.get(&self.endpoints().threads.posts, &query).await
    }

    /// Several threads at once, fetched by id.
    ///
    /// Wraps `threads/set`. Every id is sent as its own `thread` pair, in the
    /// order given.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `threads` is empty or holds an empty id,
    /// otherwise as [`Client::thread_list`].
    ///
    /// [`Error::Validation`]: crate::Error::Validation
    pub async fn thread_set<S: AsRef<str>>(
        &self,
        threads: &[S],
        params: &Params,
    ) -> Result<Envelope<Vec<Thread>>> {
        let query = self.query_with_ids(params, "thread", threads)?;
        self.get(&self.endpoints().threads.set, &query).await
    }

    /// Threads with the most activity right now.
    ///
    /// Wraps `threads/listHot`.
    ///
    /// # Errors
    ///
    /// As [`Client::thread_list`].
    pub async fn thread_hot(&self, params: &Params) -> Result<Envelope<Vec<Thread>>> {
        let query = self.query(params);
        self.get(&self.endpoints().threads.hot, &query).await
    }

    /// Most popular threads over an [`Interval`].
    ///
    /// Wraps `threads/listPopular`.
    ///
    /// # Errors
    ///
    /// As [`Client::thread_list`].
    ///
    /// [`Interval`]: crate::params::Interval
    pub async fn thread_popular(&self, params: &Params) -> Result<Envelope<Vec<Thread>>> {
        let query = self.query(params);
        self.get(&self.endpoints().threads.popular, &query).await
    }

    /// Trending threads across the whole platform.
    ///
    /// Wraps `trends/listThreads`.
    ///
    /// # Errors
    ///
    /// As [`Client::thread_list`].
    pub async fn thread_trending(&self, params: &Params) -> Result<Envelope<Vec<Trend>>> {
        let query = self.query(params);
        self.get(&self.endpoints().threads.trending, &query).await
    }

    /// Users who voted on a thread. The API sends partial user records here.
    ///
    /// Wraps `threads/listUsersVotedThread`.
    ///
    /// # Errors
    ///
    /// As [`Client::thread_details`].
    pub async fn thread_users_voted(
        &self,
        thread: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "thread", thread)?;
        self.get(&self.endpoints().threads.users_voted, &query).await
    }
}

/// A discussion thread, usually attached to one page of a forum's site.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thread {
    #[serde(deserialize_with = "null_default")]
    id: String,

    #[serde(deserialize_with = "null_default")]
    forum: String,

    /// Category id.
    #[serde(deserialize_with = "null_default")]
    category: String,

    /// User id of the thread's creator.
    #[serde(deserialize_with = "null_default")]
    author: String,

    #[serde(deserialize_with = "null_default")]
    title: String,

    #[serde(rename = "clean_title", deserialize_with = "null_default")]
    clean_title: String,

    #[serde(deserialize_with = "null_default")]
    slug: String,

    #[serde(deserialize_with = "null_default")]
    link: String,

    #[serde(deserialize_with = "null_default")]
    signed_link: String,

    #[serde(deserialize_with = "null_default")]
    feed: String,

    /// Identifiers the embedding site gave the thread.
    #[serde(deserialize_with = "null_default")]
    identifiers: Vec<String>,

    #[serde(deserialize_with = "null_default")]
    message: String,

    #[serde(deserialize_with = "null_default")]
    raw_message: String,

    #[serde(deserialize_with = "null_default")]
    likes: i64,

    #[serde(deserialize_with = "null_default")]
    dislikes: i64,

    /// Number of posts in the thread.
    #[serde(deserialize_with = "null_default")]
    posts: i64,

    #[serde(deserialize_with = "null_default")]
    user_score: i64,

    is_closed: bool,
    is_deleted: bool,
    is_spam: bool,
    has_streaming: bool,
    user_subscription: bool,

    highlighted_post: Option<Box<Post>>,

    #[serde(rename = "createdAt", deserialize_with = "null_default")]
    created_at_raw: String,

    #[serde(skip)]
    created_at: DateTime<Utc>,
}

impl Normalize for Thread {
    fn normalize(&mut self) -> Result<()> {
        self.created_at = time::parse(&self.created_at_raw)?;
        self.highlighted_post.normalize()
    }
}

impl Thread {
    /// Returns the thread id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id of the forum the thread belongs to.
    pub fn forum(&self) -> &str {
        &self.forum
    }

    /// Returns the category id.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the user id of the thread's creator.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title with markup stripped.
    pub fn clean_title(&self) -> &str {
        &self.clean_title
    }

    /// Returns the URL slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the page the thread is attached to.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the signed version of [`Thread::link`].
    pub fn signed_link(&self) -> &str {
        &self.signed_link
    }

    /// Returns the RSS feed of the thread.
    pub fn feed(&self) -> &str {
        &self.feed
    }

    /// Returns the identifiers the embedding site gave the thread.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Returns the HTML message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the message as typed.
    pub fn raw_message(&self) -> &str {
        &self.raw_message
    }

    /// Returns the number of likes.
    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Returns the number of dislikes.
    pub fn dislikes(&self) -> i64 {
        self.dislikes
    }

    /// Returns the number of posts.
    pub fn posts(&self) -> i64 {
        self.posts
    }

    /// Returns the caller's own vote score.
    pub fn user_score(&self) -> i64 {
        self.user_score
    }

    /// Returns whether the thread is closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Returns whether the thread is deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns whether the thread is marked as spam.
    pub fn is_spam(&self) -> bool {
        self.is_spam
    }

    /// Returns whether the thread is streaming.
    pub fn has_streaming(&self) -> bool {
        self.has_streaming
    }

    /// Returns whether the caller is subscribed.
    pub fn user_subscription(&self) -> bool {
        self.user_subscription
    }

    /// Returns the highlighted post (if any).
    pub fn highlighted_post(&self) -> Option<&Post> {
        self.highlighted_post.as_deref()
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the creation time exactly as the API sent it.
    pub fn created_at_raw(&self) -> &str {
        &self.created_at_raw
    }
}

/// A [`Thread`] as returned by the details operation.
///
/// Dereferences to the [`Thread`] it extends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetail {
    #[serde(flatten)]
    thread: Thread,

    #[serde(default)]
    can_moderate: bool,
}

impl Normalize for ThreadDetail {
    fn normalize(&mut self) -> Result<()> {
        self.thread.normalize()
    }
}

impl ThreadDetail {
    /// Returns whether the caller may moderate the thread.
    pub fn can_moderate(&self) -> bool {
        self.can_moderate
    }

    /// Returns the underlying thread.
    pub fn into_thread(self) -> Thread {
        self.thread
    }
}

impl Deref for ThreadDetail {
    type Target = Thread;

    fn deref(&self) -> &Thread {
        &self.thread
    }
}

/// A thread trending across the platform, with its trend metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trend {
    thread: Thread,

    #[serde(deserialize_with = "null_default")]
    post_likes: i64,

    #[serde(deserialize_with = "null_default")]
    posts: i64,

    #[serde(deserialize_with = "null_default")]
    likes: i64,

    #[serde(deserialize_with = "null_default")]
    score: f64,

    #[serde(deserialize_with = "null_default")]
    link: String,
}

impl Normalize for Trend {
    fn normalize(&mut self) -> Result<()> {
        self.thread.normalize()
    }
}

impl Trend {
    /// Returns the trending thread.
    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// Returns the likes its posts received during the trend window.
    pub fn post_likes(&self) -> i64 {
        self.post_likes
    }

    /// Returns the posts made during the trend window.
    pub fn posts(&self) -> i64 {
        self.posts
    }

    /// Returns the thread likes during the trend window.
    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Returns the trend score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the link to the thread.
    pub fn link(&self) -> &str {
        &self.link
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Thread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Thread ID: {}\n Title: {}\n Forum: {}\n Posts: {}\n Created: {}\n Link: {}\n",
            self.id,
            self.clean_title,
            self.forum,
            self.posts,
            time::format(&self.created_at),
            self.link
        )
    }
}
