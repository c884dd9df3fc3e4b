use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    models::{
        macros::str_opt_ref, null_default, thread::Thread, user::User, Envelope, Icon,
        Interesting, Normalize,
    },
    params::Params,
    result::Result,
    time, Client,
};

impl Client {
    /// Forums the API currently promotes.
    ///
    /// Wraps `forums/interestingForums`.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the API answers with a non-200 status,
    /// or the body or a timestamp in it cannot be decoded.
    pub async fn interesting_forums(&self, params: &Params) -> Result<Envelope<Interesting<Forum>>> {
        let query = self.query(params);
        self.get(&self.endpoints().forums.interesting, &query).await
    }

    /// Details of a single forum.
    ///
    /// Wraps `forums/details`. The `related` parameter is not supported;
    /// use the other forum operations to drill down.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `forum` is empty, otherwise as
    /// [`Client::interesting_forums`].
    ///
    /// [`Error::Validation`]: crate::Error::Validation
    pub async fn forum_details(&self, forum: &str, params: &Params) -> Result<Envelope<Forum>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.details, &query).await
    }

    /// Categories of a forum.
    ///
    /// Wraps `forums/listCategories`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_categories(
        &self,
        forum: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<Category>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.categories, &query).await
    }

    /// Users of a forum.
    ///
    /// Wraps `forums/listUsers`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_users(&self, forum: &str, params: &Params) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.users, &query).await
    }

    /// Threads of a forum.
    ///
    /// Wraps `forums/listThreads`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_threads(&self, forum: &str, params: &Params) -> Result<Envelope<Vec<Thread>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.threads, &query).await
    }

    /// Users of a forum with the most likes. The like counts themselves are not returned.
    ///
    /// Wraps `forums/listMostLikedUsers`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_most_liked_users(
        &self,
        forum: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.most_liked_users, &query).await
    }

    /// Followers of a forum.
    ///
    /// Wraps `forums/listFollowers`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_followers(&self, forum: &str, params: &Params) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.followers, &query).await
    }

    /// Most active users of a forum.
    ///
    /// Wraps `forums/listMostActiveUsers`.
    ///
    /// # Errors
    ///
    /// As [`Client::forum_details`].
    pub async fn forum_most_active_users(
        &self,
        forum: &str,
        params: &Params,
    ) -> Result<Envelope<Vec<User>>> {
        let query = self.query_with_id(params, "forum", forum)?;
        self.get(&self.endpoints().forums.most_active_users, &query).await
    }
}

/// A forum (a site using the commenting platform).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Forum {
    /// Short name, used as the forum id in every call.
    #[serde(deserialize_with = "null_default")]
    id: String,

    /// Display name.
    #[serde(deserialize_with = "null_default")]
    name: String,

    /// Numeric primary key, as a string.
    #[serde(deserialize_with = "null_default")]
    pk: String,

    /// Id of the user who created the forum.
    #[serde(deserialize_with = "null_default")]
    founder: String,

    /// Category the forum is filed under.
    category: Option<String>,

    /// Description, rendered as HTML.
    description: Option<String>,

    /// Description as typed by the owner.
    #[serde(rename = "raw_description")]
    raw_description: Option<String>,

    /// Community guidelines, rendered as HTML.
    guidelines: Option<String>,

    /// Community guidelines as typed by the owner.
    #[serde(rename = "raw_guidelines")]
    raw_guidelines: Option<String>,

    /// Twitter handle of the forum.
    twitter_name: Option<String>,

    /// Language code.
    #[serde(deserialize_with = "null_default")]
    language: String,

    /// Age of the forum in days.
    #[serde(deserialize_with = "null_default")]
    days_alive: i64,

    /// Days a thread stays open.
    #[serde(deserialize_with = "null_default")]
    days_thread_alive: i64,

    /// Whether the owner finished installing the embed.
    install_completed: bool,

    /// Whether platform branding is hidden.
    disable_disqus_branding: bool,

    /// Ads review status code.
    #[serde(deserialize_with = "null_default")]
    ads_review_status: i64,

    /// Owning organization.
    #[serde(deserialize_with = "null_default")]
    organization_id: i64,

    /// Signed link to the forum's site.
    signed_url: Option<String>,

    /// Favicon.
    favicon: Option<Icon>,

    /// Avatar in two sizes.
    avatar: Option<ForumAvatar>,

    /// Channel the forum belongs to, if any.
    channel: Option<ForumChannel>,

    /// Moderation and ads settings.
    settings: Option<ForumSettings>,

    /// Creation time as sent by the API (microsecond precision).
    #[serde(rename = "createdAt", deserialize_with = "null_default")]
    created_at_raw: String,

    #[serde(skip)]
    created_at: DateTime<Utc>,
}

impl Normalize for Forum {
    fn normalize(&mut self) -> Result<()> {
        self.created_at = time::parse_exact(&self.created_at_raw)?;
        Ok(())
    }
}

impl Forum {
    /// Returns the forum's short name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numeric primary key.
    pub fn pk(&self) -> &str {
        &self.pk
    }

    /// Returns the id of the founding user.
    pub fn founder(&self) -> &str {
        &self.founder
    }

    /// Returns the category (if set).
    pub fn category(&self) -> Option<&str> {
        str_opt_ref!(self.category)
    }

    /// Returns the HTML description (if set).
    pub fn description(&self) -> Option<&str> {
        str_opt_ref!(self.description)
    }

    /// Returns the raw description (if set).
    pub fn raw_description(&self) -> Option<&str> {
        str_opt_ref!(self.raw_description)
    }

    /// Returns the HTML guidelines (if set).
    pub fn guidelines(&self) -> Option<&str> {
        str_opt_ref!(self.guidelines)
    }

    /// Returns the raw guidelines (if set).
    pub fn raw_guidelines(&self) -> Option<&str> {
        str_opt_ref!(self.raw_guidelines)
    }

    /// Returns the Twitter handle (if set).
    pub fn twitter_name(&self) -> Option<&str> {
        str_opt_ref!(self.twitter_name)
    }

    /// Returns the language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the age of the forum in days.
    pub fn days_alive(&self) -> i64 {
        self.days_alive
    }

    /// Returns how many days threads stay open.
    pub fn days_thread_alive(&self) -> i64 {
        self.days_thread_alive
    }

    /// Returns whether the install was completed.
    pub fn install_completed(&self) -> bool {
        self.install_completed
    }

    /// Returns whether platform branding is disabled.
    pub fn disable_disqus_branding(&self) -> bool {
        self.disable_disqus_branding
    }

    /// Returns the ads review status code.
    pub fn ads_review_status(&self) -> i64 {
        self.ads_review_status
    }

    /// Returns the owning organization id.
    pub fn organization_id(&self) -> i64 {
        self.organization_id
    }

    /// Returns the signed site link (if set).
    pub fn signed_url(&self) -> Option<&str> {
        str_opt_ref!(self.signed_url)
    }

    /// Returns the favicon (if set).
    pub fn favicon(&self) -> Option<&Icon> {
        self.favicon.as_ref()
    }

    /// Returns the avatar (if set).
    pub fn avatar(&self) -> Option<&ForumAvatar> {
        self.avatar.as_ref()
    }

    /// Returns the channel (if any).
    pub fn channel(&self) -> Option<&ForumChannel> {
        self.channel.as_ref()
    }

    /// Returns the settings (if sent).
    pub fn settings(&self) -> Option<&ForumSettings> {
        self.settings.as_ref()
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

/// Avatar of a forum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumAvatar {
    small: Option<Icon>,
    large: Option<Icon>,
}

impl ForumAvatar {
    /// Returns the small version (if set).
    pub fn small(&self) -> Option<&Icon> {
        self.small.as_ref()
    }

    /// Returns the large version (if set).
    pub fn large(&self) -> Option<&Icon> {
        self.large.as_ref()
    }
}

/// Channel a forum is attached to.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumChannel {
    #[serde(deserialize_with = "null_default")]
    id: String,
    #[serde(deserialize_with = "null_default")]
    slug: String,
    #[serde(deserialize_with = "null_default")]
    name: String,
    owner_id: Option<String>,
    banner: Option<String>,
    banner_color: Option<String>,
    banner_color_hex: Option<String>,
    avatar: Option<String>,
    /// Kept as sent: the API does not use one of its usual layouts here.
    date_added: Option<String>,
    hidden: bool,
    is_aggregation: bool,
    is_category: bool,
    enable_curation: bool,
    admin_only: bool,
    options: Option<ChannelOptions>,
}

impl ForumChannel {
    /// Returns the channel id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the channel slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owner's user id (if set).
    pub fn owner_id(&self) -> Option<&str> {
        str_opt_ref!(self.owner_id)
    }

    /// Returns the banner image URL (if set).
    pub fn banner(&self) -> Option<&str> {
        str_opt_ref!(self.banner)
    }

    /// Returns the banner color name (if set).
    pub fn banner_color(&self) -> Option<&str> {
        str_opt_ref!(self.banner_color)
    }

    /// Returns the banner color as a hex string (if set).
    pub fn banner_color_hex(&self) -> Option<&str> {
        str_opt_ref!(self.banner_color_hex)
    }

    /// Returns the avatar URL (if set).
    pub fn avatar(&self) -> Option<&str> {
        str_opt_ref!(self.avatar)
    }

    /// Returns the date the channel was added, unparsed (if set).
    pub fn date_added(&self) -> Option<&str> {
        str_opt_ref!(self.date_added)
    }

    /// Returns whether the channel is hidden.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Returns whether the channel aggregates other forums.
    pub fn is_aggregation(&self) -> bool {
        self.is_aggregation
    }

    /// Returns whether the channel is a category.
    pub fn is_category(&self) -> bool {
        self.is_category
    }

    /// Returns whether curation is enabled.
    pub fn enable_curation(&self) -> bool {
        self.enable_curation
    }

    /// Returns whether only admins can post.
    pub fn admin_only(&self) -> bool {
        self.admin_only
    }

    /// Returns the channel options (if set).
    pub fn options(&self) -> Option<&ChannelOptions> {
        self.options.as_ref()
    }
}

/// Presentation options of a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelOptions {
    title: Option<String>,
    description: Option<String>,
    about_url_path: Option<String>,
    mod_email: Option<String>,
    favicon: Option<String>,
    alert_background: Option<String>,
    banner_color: Option<String>,
    banner_timestamp: Option<String>,
    is_curation_channel: bool,
}

impl ChannelOptions {
    /// Returns the title (if set).
    pub fn title(&self) -> Option<&str> {
        str_opt_ref!(self.title)
    }

    /// Returns the description (if set).
    pub fn description(&self) -> Option<&str> {
        str_opt_ref!(self.description)
    }

    /// Returns the path of the about page (if set).
    pub fn about_url_path(&self) -> Option<&str> {
        str_opt_ref!(self.about_url_path)
    }

    /// Returns the moderators' email (if set).
    pub fn mod_email(&self) -> Option<&str> {
        str_opt_ref!(self.mod_email)
    }

    /// Returns the favicon URL (if set).
    pub fn favicon(&self) -> Option<&str> {
        str_opt_ref!(self.favicon)
    }

    /// Returns the alert background (if set).
    pub fn alert_background(&self) -> Option<&str> {
        str_opt_ref!(self.alert_background)
    }

    /// Returns the banner color (if set).
    pub fn banner_color(&self) -> Option<&str> {
        str_opt_ref!(self.banner_color)
    }

    /// Returns the banner timestamp, unparsed (if set).
    pub fn banner_timestamp(&self) -> Option<&str> {
        str_opt_ref!(self.banner_timestamp)
    }

    /// Returns whether this is a curation channel.
    pub fn is_curation_channel(&self) -> bool {
        self.is_curation_channel
    }
}

/// Moderation and monetization settings of a forum.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumSettings {
    #[serde(deserialize_with = "null_default")]
    support_level: i64,
    allow_anon_post: bool,
    allow_anon_votes: bool,
    allow_media: bool,
    adult_content: bool,
    must_verify: bool,
    must_verify_email: bool,
    sso_required: bool,
    unapprove_links: bool,
    validate_all_posts: bool,
    mediaembed_enabled: bool,
    has_custom_avatar: bool,
    organic_discovery_enabled: bool,
    discovery_locked: bool,
    ads_enabled: bool,
    ads_settings_locked: bool,
    link_affiliation_enabled: bool,
    #[serde(rename = "disable3rdPartyTrackers")]
    disable_third_party_trackers: bool,
    #[serde(rename = "isVIP")]
    is_vip: bool,
}

impl ForumSettings {
    /// Returns the support level.
    pub fn support_level(&self) -> i64 {
        self.support_level
    }

    /// Returns whether guests can post.
    pub fn allow_anon_post(&self) -> bool {
        self.allow_anon_post
    }

    /// Returns whether guests can vote.
    pub fn allow_anon_votes(&self) -> bool {
        self.allow_anon_votes
    }

    /// Returns whether media can be embedded in posts.
    pub fn allow_media(&self) -> bool {
        self.allow_media
    }

    /// Returns whether the forum hosts adult content.
    pub fn adult_content(&self) -> bool {
        self.adult_content
    }

    /// Returns whether commenters must be verified.
    pub fn must_verify(&self) -> bool {
        self.must_verify
    }

    /// Returns whether commenters must verify their email.
    pub fn must_verify_email(&self) -> bool {
        self.must_verify_email
    }

    /// Returns whether single sign-on is required.
    pub fn sso_required(&self) -> bool {
        self.sso_required
    }

    /// Returns whether posts with links are held for moderation.
    pub fn unapprove_links(&self) -> bool {
        self.unapprove_links
    }

    /// Returns whether every post is held for moderation.
    pub fn validate_all_posts(&self) -> bool {
        self.validate_all_posts
    }

    /// Returns whether media embeds are enabled.
    pub fn mediaembed_enabled(&self) -> bool {
        self.mediaembed_enabled
    }

    /// Returns whether the forum has a custom avatar.
    pub fn has_custom_avatar(&self) -> bool {
        self.has_custom_avatar
    }

    /// Returns whether organic discovery is enabled.
    pub fn organic_discovery_enabled(&self) -> bool {
        self.organic_discovery_enabled
    }

    /// Returns whether discovery settings are locked.
    pub fn discovery_locked(&self) -> bool {
        self.discovery_locked
    }

    /// Returns whether ads are enabled.
    pub fn ads_enabled(&self) -> bool {
        self.ads_enabled
    }

    /// Returns whether ads settings are locked.
    pub fn ads_settings_locked(&self) -> bool {
        self.ads_settings_locked
    }

    /// Returns whether link affiliation is enabled.
    pub fn link_affiliation_enabled(&self) -> bool {
        self.link_affiliation_enabled
    }

    /// Returns whether third-party trackers are disabled.
    pub fn disable_third_party_trackers(&self) -> bool {
        self.disable_third_party_trackers
    }

    /// Returns whether the forum is a VIP account.
    pub fn is_vip(&self) -> bool {
        self.is_vip
    }
}

/// A category of a forum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(deserialize_with = "null_default")]
    id: String,
    #[serde(deserialize_with = "null_default")]
    title: String,
    #[serde(deserialize_with = "null_default")]
    forum: String,
    #[serde(deserialize_with = "null_default")]
    order: i64,
    is_default: bool,
}

impl Normalize for Category {
    fn normalize(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Category {
    /// Returns the category id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the forum the category belongs to.
    pub fn forum(&self) -> &str {
        &self.forum
    }

    /// Returns the display position.
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Returns whether this is the forum's default category.
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Forum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Forum: {} ({})\nCreated: {}\n",
            self.name,
            self.id,
            time::format_exact(&self.created_at)
        )
    }
}
