use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    models::{
        forum::Forum, macros::str_opt_ref, null_default, post::Post, Envelope, Icon, Interesting,
        Normalize,
    },
    params::Params,
    result::Result,
    time, Client,
};

impl Client {
    /// Details of a single user.
    ///
    /// Wraps `users/details`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `user` is empty; otherwise fails if the request
    /// fails, the API answers with a non-200 status, or the body or a
    /// timestamp in it cannot be decoded.
    pub async fn user_details(&self, user: &str, params: &Params) -> Result<Envelope<User>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.details, &query).await
    }

    /// Users the API currently promotes.
    ///
    /// Wraps `users/interestingUsers`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`], minus the validation.
    pub async fn user_interesting(&self, params: &Params) -> Result<Envelope<Interesting<User>>> {
        let query = self.query(params);
        self.get(&self.endpoints().users.interesting, &query).await
    }

    /// Posts written by a user.
    ///
    /// Wraps `users/listPosts`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_posts(&self, user: &str, params: &Params) -> Result<Envelope<Vec<Post>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.posts, &query).await
    }

    /// The activity feed of a user, decoded into posts.
    ///
    /// Wraps `users/listActivity`. The feed is a list of tagged fragments;
    /// `post` and `reply` fragments are decoded as [`Post`]s whose parent is
    /// taken from the nested parent record.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `user` is empty or the feed holds a fragment
    ///   of any other type.
    /// - [`Error::Decode`] if a fragment or its parent id cannot be decoded.
    /// - Otherwise as [`Client::user_details`].
    pub async fn user_activities(&self, user: &str, params: &Params) -> Result<Envelope<Vec<Post>>> {
        let query = self.query_with_id(params, "user", user)?;
        let raw: Envelope<Vec<Fragment>> = self
            .fetch_json(&self.endpoints().users.activity, &query)
            .await?;

        let response = raw
            .response
            .into_iter()
            .map(Fragment::into_post)
            .collect::<Result<Vec<_>>>()?;

        let mut envelope = Envelope {
            code: raw.code,
            cursor: raw.cursor,
            response,
        };
        envelope.normalize()?;
        Ok(envelope)
    }

    /// Forums a user has been active in.
    ///
    /// Wraps `users/listActiveForums`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_active_forums(
        &self,
        user: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<Forum>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.active_forums, &query).await
    }

    /// Forums a user posts in the most.
    ///
    /// Wraps `users/listMostActiveForums`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_most_active_forums(
        &self,
        user: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<Forum>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.most_active_forums, &query).await
    }

    /// Users following a user.
    ///
    /// Wraps `users/listFollowers`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_followers(&self, user: &str, params: &Params) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.followers, &query).await
    }

    /// Users a user follows.
    ///
    /// Wraps `users/listFollowing`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_following(&self, user: &str, params: &Params) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.following, &query).await
    }

    /// Forums a user follows.
    ///
    /// Wraps `users/listFollowingForums`.
    ///
    /// # Errors
    ///
    /// As [`Client::user_details`].
    pub async fn user_following_forums(
        &self,
        user: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<Forum>>> {
        let query = self.query_with_id(params, "user", user)?;
        self.get(&self.endpoints().users.following_forums, &query).await
    }
}

/// One element of an activity feed.
#[derive(Debug, Deserialize)]
struct Fragment {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    object: serde_json::Value,
}

/// A post as embedded in an activity fragment, with its parent as a record.
#[derive(Debug, Deserialize)]
struct ActivityPost {
    #[serde(default)]
    parent: Option<ParentRef>,
    #[serde(flatten)]
    post: Post,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParentRef {
    #[serde(deserialize_with = "null_default")]
    id: String,
}

impl Fragment {
    fn into_post(self) -> Result<Post> {
        match self.kind.as_str() {
            "post" | "reply" => {
                let ActivityPost { parent, mut post } = serde_json::from_value(self.object)?;
                post.parent = match parent {
                    Some(parent) if !parent.id.is_empty() => Some(parse_parent(&parent.id)?),
                    _ => None,
                };
                Ok(post)
            }
            other => Err(Error::Validation(format!(
                "unexpected activity type: {other}"
            ))),
        }
    }
}

fn parse_parent(id: &str) -> Result<u64> {
    id.parse().map_err(|_| {
        Error::Decode(<serde_json::Error as serde::de::Error>::custom(format!(
            "parent id {id:?} is not numeric"
        )))
    })
}

/// A user account.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    id: String,

    #[serde(deserialize_with = "null_default")]
    username: String,

    /// Display name.
    #[serde(deserialize_with = "null_default")]
    name: String,

    about: Option<String>,
    url: Option<String>,
    profile_url: Option<String>,
    location: Option<String>,
    signed_url: Option<String>,

    #[serde(deserialize_with = "null_default")]
    reputation: f64,

    #[serde(deserialize_with = "null_default")]
    rep: f64,

    reputation_label: Option<String>,

    #[serde(deserialize_with = "null_default")]
    num_followers: i64,

    #[serde(deserialize_with = "null_default")]
    num_following: i64,

    #[serde(deserialize_with = "null_default")]
    num_posts: i64,

    #[serde(deserialize_with = "null_default")]
    num_likes_received: i64,

    #[serde(deserialize_with = "null_default")]
    num_forums_following: i64,

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

impl Normalize for User {
    fn normalize(&mut self) -> Result<()> {
        self.joined_at = time::parse(&self.joined_at_raw)?;
        Ok(())
    }
}

impl User {
    /// Returns the user id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the username.
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

    /// Returns the user's website (if set).
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

    /// Returns the reputation score.
    pub fn reputation(&self) -> f64 {
        self.reputation
    }

    /// Returns the short reputation score.
    pub fn rep(&self) -> f64 {
        self.rep
    }

    /// Returns the reputation label (if sent).
    pub fn reputation_label(&self) -> Option<&str> {
        str_opt_ref!(self.reputation_label)
    }

    /// Returns the number of followers.
    pub fn num_followers(&self) -> i64 {
        self.num_followers
    }

    /// Returns the number of users followed.
    pub fn num_following(&self) -> i64 {
        self.num_following
    }

    /// Returns the number of posts.
    pub fn num_posts(&self) -> i64 {
        self.num_posts
    }

    /// Returns the number of likes received.
    pub fn num_likes_received(&self) -> i64 {
        self.num_likes_received
    }

    /// Returns the number of forums followed.
    pub fn num_forums_following(&self) -> i64 {
        self.num_forums_following
    }

    /// Returns whether the account is a guest.
    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Returns whether the profile is private.
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Returns whether this is the primary account.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns whether the user is a power contributor.
    pub fn is_power_contributor(&self) -> bool {
        self.is_power_contributor
    }

    /// Returns whether the user opted out of third-party trackers.
    pub fn disable_third_party_trackers(&self) -> bool {
        self.disable_third_party_trackers
    }

    /// Returns the avatar (if set).
    pub fn avatar(&self) -> Option<&UserAvatar> {
        self.avatar.as_ref()
    }

    /// Returns when the user joined.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Returns the join time exactly as the API sent it.
    pub fn joined_at_raw(&self) -> &str {
        &self.joined_at_raw
    }
}

/// A user's avatar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAvatar {
    small: Option<Icon>,
    large: Option<Icon>,
    #[serde(flatten)]
    icon: Icon,
    is_custom: bool,
}

impl UserAvatar {
    /// Returns the small version (if sent).
    pub fn small(&self) -> Option<&Icon> {
        self.small.as_ref()
    }

    /// Returns the large version (if sent).
    pub fn large(&self) -> Option<&Icon> {
        self.large.as_ref()
    }

    /// Returns the full-size image.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Returns whether the user uploaded the avatar.
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User ID: {}\n Username: {}\n Name: {}\n Posts: {}\n Joined: {}\n",
            self.id,
            self.username,
            self.name,
            self.num_posts,
            time::format(&self.joined_at)
        )
    }
}
