use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// Forums and the `forums/*` operations.
pub mod forum;

/// Posts and the `posts/*` operations.
pub mod post;

/// Threads, trends and the `threads/*` operations.
pub mod thread;

/// Users, their activity feed and the `users/*` operations.
pub mod user;

/// The outer object of every API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status code reported by the API; `0` on success.
    pub code: i32,

    /// Paging cursor, sent by list operations only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,

    /// Operation-specific payload.
    pub response: T,
}

/// Paging information of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cursor {
    /// Cursor of the previous page.
    #[serde(deserialize_with = "null_default")]
    pub prev: String,
    /// Cursor of the next page.
    #[serde(deserialize_with = "null_default")]
    pub next: String,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Total number of results, when the API reports it.
    #[serde(deserialize_with = "null_default")]
    pub total: i64,
    /// Cursor of the current page.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Whether more results exist.
    pub more: bool,
}

/// An image the API serves in several sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    /// Canonical location.
    #[serde(deserialize_with = "null_default")]
    pub permalink: String,
    /// CDN location.
    #[serde(deserialize_with = "null_default")]
    pub cache: String,
}

/// One entry of an "interesting" listing, pointing into its `objects` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestingItem {
    /// Why the entry was picked.
    #[serde(deserialize_with = "null_default")]
    pub reason: String,
    /// Key of the entry in [`Interesting::objects`].
    #[serde(deserialize_with = "null_default")]
    pub id: String,
}

/// Payload of the "interesting forums/users" operations.
///
/// `objects` is keyed by an opaque composite id (e.g. `forums.Forum?id=disqus`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interesting<T> {
    /// Ranked entries.
    #[serde(default)]
    pub items: Vec<InterestingItem>,
    /// The entries' records.
    #[serde(default = "HashMap::new")]
    pub objects: HashMap<String, T>,
}

impl<T> Interesting<T> {
    /// Records in ranking order; entries without a record are skipped.
    pub fn ranked(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| self.objects.get(&item.id))
    }
}

/// Fills the typed timestamp fields of a decoded record from their raw strings.
pub(crate) trait Normalize {
    fn normalize(&mut self) -> Result<()>;
}

impl<T: Normalize> Normalize for Envelope<T> {
    fn normalize(&mut self) -> Result<()> {
        self.response.normalize()
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self) -> Result<()> {
        self.iter_mut().try_for_each(Normalize::normalize)
    }
}

impl<T: Normalize> Normalize for Option<T> {
    fn normalize(&mut self) -> Result<()> {
        self.as_mut().map_or(Ok(()), Normalize::normalize)
    }
}

impl<T: Normalize> Normalize for Box<T> {
    fn normalize(&mut self) -> Result<()> {
        self.as_mut().normalize()
    }
}

impl<T: Normalize> Normalize for Interesting<T> {
    fn normalize(&mut self) -> Result<()> {
        self.objects.values_mut().try_for_each(Normalize::normalize)
    }
}

/// Decodes `null` as the type's default, which a plain `#[serde(default)]` does not.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = <Option<T> as Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}
