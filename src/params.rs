//! Query parameters accepted by the API.
//!
//! [`Params`] is what every endpoint method takes for its optional arguments.
//! The client adds `api_secret` and the operation's identifier on top of it,
//! replacing any value the caller put under those keys.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::time;

/// An ordered list of query pairs; a key may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every value of `key` with `value`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.replace(key.into(), value.into());
        self
    }

    /// Appends `value` under `key`, keeping existing values.
    #[must_use]
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Removes every value of `key`.
    #[must_use]
    pub fn remove(mut self, key: &str) -> Self {
        self.pairs.retain(|(k, _)| k != key);
        self
    }

    /// Maximum number of results to return.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.set("limit", limit.to_string())
    }

    /// Cursor returned by a previous call, for paging.
    #[must_use]
    pub fn cursor(self, cursor: impl Into<String>) -> Self {
        self.set("cursor", cursor)
    }

    /// Sort order of the results.
    #[must_use]
    pub fn order(self, order: Order) -> Self {
        self.set("order", order.as_str())
    }

    /// Only return results newer than `since` (second precision).
    #[must_use]
    pub fn since(self, since: &DateTime<Utc>) -> Self {
        self.set("since", time::format(since))
    }

    /// Only return results newer than `since` (microsecond precision).
    #[must_use]
    pub fn since_exact(self, since: &DateTime<Utc>) -> Self {
        self.set("since", time::format_exact(since))
    }

    /// Time window for ranking endpoints (hot, popular, most active...).
    #[must_use]
    pub fn interval(self, interval: Interval) -> Self {
        self.set("interval", interval.as_str())
    }

    /// Sort type for post listings.
    #[must_use]
    pub fn sort_type(self, sort: SortType) -> Self {
        self.set("sortType", sort.as_str())
    }

    /// Restricts a listing to one forum.
    #[must_use]
    pub fn forum(self, forum: impl Into<String>) -> Self {
        self.set("forum", forum)
    }

    /// Includes posts in `state`; may be given several times.
    #[must_use]
    pub fn include(self, state: PostState) -> Self {
        self.add("include", state.as_str())
    }

    /// Filters posts by moderation issue; may be given several times.
    #[must_use]
    pub fn filter(self, issue: PostIssue) -> Self {
        self.add("filters", issue.code().to_string())
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no pair has been set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    pub(crate) fn replace(&mut self, key: String, value: String) {
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value));
    }

    pub(crate) fn replace_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs
            .extend(values.into_iter().map(|v| (key.to_string(), v.into())));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The value as sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Result ordering.
    Order {
        /// Oldest first.
        Asc => "asc",
        /// Newest first.
        Desc => "desc",
    }
}

vocabulary! {
    /// Ranking windows.
    Interval {
        /// One hour.
        Hour => "1h",
        /// Six hours.
        SixHours => "6h",
        /// Twelve hours.
        TwelveHours => "12h",
        /// One day.
        Day => "1d",
        /// Three days.
        ThreeDays => "3d",
        /// One week.
        Week => "7d",
        /// Thirty days.
        Month => "30d",
        /// Ninety days.
        Quarter => "90d",
    }
}

vocabulary! {
    /// Post sort types.
    SortType {
        /// By creation date.
        Date => "date",
        /// By priority.
        Priority => "priority",
    }
}

vocabulary! {
    /// Moderation states a post can be in.
    PostState {
        /// Waiting for moderation.
        Unapproved => "unapproved",
        /// Approved.
        Approved => "approved",
        /// Marked as spam.
        Spam => "spam",
        /// Deleted.
        Deleted => "deleted",
        /// Flagged by users.
        Flagged => "flagged",
        /// Highlighted by a moderator.
        Highlighted => "highlighted",
    }
}

/// Moderation issues posts can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostIssue {
    /// Posted anonymously.
    IsAnonymous,
    /// Contains a link.
    HasLink,
    /// Author has low reputation.
    HasLowRepAuthor,
    /// Contains a blacklisted word.
    HasBadWord,
    /// Flagged by users.
    IsFlagged,
    /// No issue.
    NoIssue,
}

impl PostIssue {
    /// Numeric code the API expects.
    pub fn code(self) -> u8 {
        match self {
            PostIssue::IsAnonymous => 1,
            PostIssue::HasLink => 2,
            PostIssue::HasLowRepAuthor => 3,
            PostIssue::HasBadWord => 4,
            PostIssue::IsFlagged => 5,
            PostIssue::NoIssue => 6,
        }
    }
}
