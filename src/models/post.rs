use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    models::{macros::str_opt_ref, null_default, user::UserAvatar, Envelope, Normalize},
    params::Params,
    result::Result,
    time, Client,
};

impl Client {
    /// Details of a single post.
    ///
    /// Wraps `posts/details`. The `related` parameter is not supported.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `post` is empty; otherwise fails if the request
    /// fails, the API answers with a non-200 status, or the body or a
    /// timestamp in it cannot be decoded.
    ///
    /// [`Error::Validation`]: crate::Error::Validation
    pub async fn post_details(&self, post: &str, params: &Params) -> Result<Envelope<Post>> {
        let query = self.query_with_id(params, "post", post)?;
        self.get(&self.endpoints().posts.details, &query).await
    }

    /// Lists posts, filtered by `params` (e.g. [`Params::forum`], [`Params::include`]).
    ///
    /// Wraps `posts/list`.
    ///
    /// # Errors
    ///
    /// As [`Client::post_details`], minus the validation.
    pub async fn post_list(&self, params: &Params) -> Result<Envelope<Vec<Post>>> {
        let query = self.query(params);
        self.get(&self.endpoints().posts.list, &query).await
    }

    /// Most popular posts over an [`Interval`].
    ///
    /// Wraps `posts/listPopular`; the response carries no cursor.
    ///
    /// # Errors
    ///
    /// As [`Client::post_list`].
    ///
    /// [`Interval`]: crate::params::Interval
    pub async fn post_popular(&self, params: &Params) -> Result<Envelope<Vec<Post>>> {
        let query = self.query(params);
        self.get(&self.endpoints().posts.popular, &query).await
    }
}

/// A comment posted in a thread.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    /// The post id.
    #[serde(deserialize_with = "null_default")]
    pub(crate) id: String,

    /// Id of the post this one replies to; `None` for top-level posts.
    pub(crate) parent: Option<u64>,

    /// Id of the thread the post belongs to.
    #[serde(deserialize_with = "null_default")]
    thread: String,

    /// Id of the forum the post belongs to.
    #[serde(deserialize_with = "null_default")]
    forum: String,

    /// Message rendered as HTML.
    #[serde(deserialize_with = "null_default")]
    message: String,

    /// Message as typed by the author.
    #[serde(deserialize_with = "null_default")]
    raw_message: String,

    #[serde(deserialize_with = "null_default")]
    likes: i64,

    #[serde(deserialize_with = "null_default")]
    dislikes: i64,

    #[serde(deserialize_with = "null_default")]
    points: i64,

    #[serde(deserialize_with = "null_default")]
    num_reports: i64,

    is_approved: bool,
    is_deleted: bool,
    is_deleted_by_author: bool,
    is_edited: bool,
    is_flagged: bool,
    is_highlighted: bool,
    is_spam: bool,
    can_vote: bool,
    sb: bool,

    #[serde(deserialize_with = "null_default")]
    moderation_labels: Vec<String>,

    /// Attached media, left undecoded.
    #[serde(deserialize_with = "null_default")]
    media: Vec<serde_json::Value>,

    author: Option<PostAuthor>,

    /// Creation time as sent by the API.
    #[serde(rename = "createdAt", deserialize_with = "null_default")]
    created_at_raw: String,

    #[serde(skip)]
    created_at: DateTime<Utc>,
}

impl Normalize for Post {
    fn normalize(&mut self) -> Result<()> {
        self.created_at = time::parse(&self.created_at_raw)?;
        self.author.normalize()
    }
}

impl Post {
    /// Returns the post id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id of the parent post (`None` for top-level posts).
    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    /// Returns the thread id.
    pub fn thread(&self) -> &str {
        &self.thread
    }

    /// Returns the forum id.
    pub fn forum(&self) -> &str {
        &self.forum
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

    /// Returns likes minus dislikes.
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Returns how many times the post was reported.
    pub fn num_reports(&self) -> i64 {
        self.num_reports
    }

    /// Returns whether the post is approved.
    pub fn is_approved(&self) -> bool {
        self.is_approved
    }

    /// Returns whether the post is deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns whether the author deleted the post.
    pub fn is_deleted_by_author(&self) -> bool {
        self.is_deleted_by_author
    }

    /// Returns whether the post was edited.
    pub fn is_edited(&self) -> bool {
        self.is_edited
    }

    /// Returns whether the post is flagged.
    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Returns whether the post is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Returns whether the post is marked as spam.
    pub fn is_spam(&self) -> bool {
        self.is_spam
    }

    /// Returns whether the caller may vote on the post.
    pub fn can_vote(&self) -> bool {
        self.can_vote
    }

    /// Returns the `sb` flag.
    pub fn sb(&self) -> bool {
        self.sb
    }

    /// Returns the moderation labels.
    pub fn moderation_labels(&self) -> &[String] {
        &self.moderation_labels
    }

    /// Returns the attached media as raw JSON.
    pub fn media(&self) -> &[serde_json::Value] {
        &self.media
    }

    /// Returns the author (if sent).
    pub fn author(&self) -> Option<&PostAuthor> {
        self.author.as_ref()
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

/// The author of a post, as embedded in it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostAuthor {
    #[serde(deserialize_with = "null_default")]
    id: String,
    #[serde(deserialize_with = "null_default")]
    username: String,
    #[serde(deserialize_with = "null_default")]
    name: String,
    about: Option<String>,
    url: Option<String>,
    profile_url: Option<String>,
    location: Option<String>,
    signed_url: Option<String>,
    is_anonymous: bool,
    is_private: bool,
    is_primary: bool,
    is_power_contributor: bool,
    #[serde(rename = "disable3rdPartyTrackers")]
    disable_third_party_trackers: bool,
    avatar: Option<UserAvatar>,
    #[serde(rename = "joinedAt", deserialize_with = "null_default")]
    joined_at_raw: String,
    #[serde(skip)]
    joined_at: DateTime<Utc>,
}

impl Normalize for PostAuthor {
    fn normalize(&mut self) -> Result<()> {
        self.joined_at = time::parse(&self.joined_at_raw)?;
        Ok(())
    }
}

impl PostAuthor {
    /// Returns the user id (empty for guests).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the username (empty for guests).
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profile blurb (if set).
    pub fn about(&self) -> Option<&str> {
        str_opt_ref!(self.about)
    }

    /// Returns the author's website (if set).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the profile page URL (if set).
    pub fn profile_url(&self) -> Option<&str> {
        str_opt_ref!(self.profile_url)
    }

    /// Returns the location (if set).
    pub fn location(&self) -> Option<&str> {
        str_opt_ref!(self.location)
    }

    /// Returns the signed website link (if set).
    pub fn signed_url(&self) -> Option<&str> {
        str_opt_ref!(self.signed_url)
    }

    /// Returns whether the author posted as a guest.
    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Returns whether the author's profile is private.
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Returns whether this is the author's primary account.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns whether the author is a power contributor.
    pub fn is_power_contributor(&self) -> bool {
        self.is_power_contributor
    }

    /// Returns whether the author opted out of third-party trackers.
    pub fn disable_third_party_trackers(&self) -> bool {
        self.disable_third_party_trackers
    }

    /// Returns the avatar (if set).
    pub fn avatar(&self) -> Option<&UserAvatar> {
        self.avatar.as_ref()
    }

    /// Returns when the author joined.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Returns the join time exactly as the API sent it.
    pub fn joined_at_raw(&self) -> &str {
        &self.joined_at_raw
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let author = self.author.as_ref().map_or("", |a| a.name.as_str());
        write!(
            f,
            "Post ID: {}\n Author: {}\n Created: {}\n Content: {}\n",
            self.id,
            author,
            time::format(&self.created_at),
            self.raw_message
        )
    }
}
