#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
//! # disqus-client
//!
//! disqus-client is a typed wrapper library around the Disqus 3.0 read API.
//!
//! This library can fetch:
//! - [`Forum`]s, their users, threads and categories
//! - [`Thread`]s, their posts, and trending/hot/popular listings
//! - [`Post`]s
//! - [`User`]s, their posts, forums, followers and activity feed
//!
//! Every response comes back wrapped in an [`Envelope`] with its timestamps
//! already parsed into [`chrono::DateTime<Utc>`] values. The rate-limit
//! headers of the last response are kept on the [`Client`] and can be read
//! with [`Client::limits`].
//!
//! ## Example: Printing a forum's creation date.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use disqus_client::{Client, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-api-secret")?;
//!     let details = client.forum_details("disqus", &Params::new()).await?;
//!
//!     println!("{} created at {}", details.response.name(), details.response.created_at());
//!     println!("calls left this hour: {}", client.limits().remaining);
//!     Ok(())
//! }
//! ```
//!
//! [`Forum`]: crate::forum::Forum
//! [`Thread`]: crate::thread::Thread
//! [`Post`]: crate::post::Post
//! [`User`]: crate::user::User
//! [`Envelope`]: crate::Envelope
//! [`chrono::DateTime<Utc>`]: chrono::DateTime

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Base URLs of every API operation, grouped by resource.
pub mod endpoints;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Query parameter builder and the API's parameter vocabulary.
pub mod params;

/// Rate-limit bookkeeping.
pub mod rate_limit;

/// Conversions between the API's timestamp strings and [`chrono`] values.
pub mod time;

pub(crate) mod models;

pub(crate) mod result;

pub use client::{Client, ClientBuilder};
pub use endpoints::Endpoints;
pub use error::{Error, FormatError};
pub use models::*;
pub use params::Params;
pub use rate_limit::RateLimit;
pub use result::Result;

/// Returns the forum id from a `forum=<id>` style string.
///
/// Everything after the last `=` is returned, or the whole string if there is none.
///
/// ```
/// assert_eq!(disqus_client::extract_forum_id("forum=channel-discussdisqus"), "channel-discussdisqus");
/// assert_eq!(disqus_client::extract_forum_id("disqus"), "disqus");
/// ```
pub fn extract_forum_id(forum: &str) -> &str {
    forum.rsplit('=').next().unwrap_or(forum)
}
