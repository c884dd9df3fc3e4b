//! Prints the recent activity of a user, marking replies with their parent post.
//!
//! `DISQUS_API_SECRET=... cargo run --example user_activity -- <user id>`

use anyhow::Context;
use disqus_client::{Client, Params};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(log::LevelFilter::Debug).init()?;

    let secret = std::env::var("DISQUS_API_SECRET").context("DISQUS_API_SECRET is not set")?;
    let user = std::env::args().nth(1).context("usage: user_activity <user id>")?;

    let client = Client::new(secret)?;
    let activity = client
        .user_activities(&user, &Params::new().limit(25))
        .await?;

    for post in &activity.response {
        match post.parent() {
            Some(parent) => println!("[{}] reply to {parent} in {}", post.created_at(), post.thread()),
            None => println!("[{}] post in {}", post.created_at(), post.thread()),
        }
        println!("    {}", post.raw_message());
    }

    Ok(())
}
