//! Fetches a forum's details and a page of its threads.
//!
//! Run with the API secret in `DISQUS_API_SECRET`:
//! `DISQUS_API_SECRET=... cargo run --example forum_details --features display`

use disqus_client::{params::Order, Client, Params};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // setting up the logger
    SimpleLogger::new().init()?;

    let client = Client::new(std::env::var("DISQUS_API_SECRET")?)?;

    // "forum=disqus" style strings show up in links, the id is the last part
    let forum = disqus_client::extract_forum_id("forum=disqus");

    let details = client.forum_details(forum, &Params::new()).await?;
    let forum = &details.response;
    println!("{} ({}) created at {}", forum.name(), forum.id(), forum.created_at());

    let params = Params::new().limit(5).order(Order::Desc);
    let threads = client.forum_threads(forum.id(), &params).await?;
    for thread in &threads.response {
        #[cfg(feature = "display")]
        println!("{thread}");
        #[cfg(not(feature = "display"))]
        println!("{} - {} posts", thread.clean_title(), thread.posts());
    }

    if let Some(cursor) = threads.cursor.filter(|c| c.has_next) {
        println!("next page: {}", cursor.next);
    }

    // every response refreshes the rate-limit snapshot
    let limits = client.limits();
    println!(
        "{}/{} calls left, window resets at {}",
        limits.remaining, limits.limit, limits.reset_at
    );

    Ok(())
}
