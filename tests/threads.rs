#![allow(clippy::unwrap_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{client_for, ok, sent_values};
use disqus_client::{
    params::{Interval, Order},
    Error, Params,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_thread_set_sends_ids_in_order() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/set.json"))
        .respond_with(ok(include_str!("fixtures/threads_set.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let threads = client
        .thread_set(&["30", "10", "20"], &Params::new())
        .await
        .unwrap();

    // Assert
    assert_eq!(sent_values(&server, "thread").await, vec!["30", "10", "20"]);
    assert_eq!(sent_values(&server, "api_secret").await.len(), 1);
    let ids: Vec<_> = threads.response.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["30", "10", "20"]);
    assert!(threads.cursor.is_none());
}

#[tokio::test]
async fn test_thread_set_rejects_missing_ids() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let none: Vec<String> = Vec::new();

    // Act
    let from_empty = client.thread_set(&none, &Params::new()).await;
    let from_blank = client.thread_set(&["10", ""], &Params::new()).await;

    // Assert
    assert!(matches!(from_empty, Err(Error::Validation(_))));
    assert!(matches!(from_blank, Err(Error::Validation(_))));
}

#[tokio::test]
async fn test_thread_details() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/details.json"))
        .and(query_param("thread", "5903616016"))
        .respond_with(ok(include_str!("fixtures/thread_details.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let details = client
        .thread_details("5903616016", &Params::new())
        .await
        .unwrap();

    // Assert
    let thread = details.response;
    assert!(!thread.can_moderate());
    assert_eq!(thread.slug(), "leafs_sign_forward");
    assert_eq!(thread.posts(), 219);
    assert_eq!(
        thread.created_at(),
        Utc.with_ymd_and_hms(2017, 6, 13, 10, 6, 43).unwrap()
    );
}

#[tokio::test]
async fn test_thread_list_passes_vocabulary() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/list.json"))
        .and(query_param("forum", "mapleleafshotstove"))
        .and(query_param("order", "asc"))
        .and(query_param("limit", "2"))
        .respond_with(ok(include_str!("fixtures/forum_threads.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let params = Params::new()
        .forum("mapleleafshotstove")
        .order(Order::Asc)
        .limit(2);

    // Act
    let threads = client.thread_list(&params).await.unwrap();

    // Assert
    assert_eq!(threads.response.len(), 2);
}

#[tokio::test]
async fn test_thread_popular_interval() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/listPopular.json"))
        .and(query_param("interval", "7d"))
        .respond_with(ok(include_str!("fixtures/threads_set.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let threads = client
        .thread_popular(&Params::new().interval(Interval::Week))
        .await
        .unwrap();

    // Assert
    assert_eq!(threads.response.len(), 3);
}

#[tokio::test]
async fn test_thread_trending_normalizes_highlighted_post() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/listThreads.json"))
        .respond_with(ok(include_str!("fixtures/thread_trending.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let trends = client.thread_trending(&Params::new()).await.unwrap();

    // Assert
    let trend = &trends.response[0];
    assert_eq!(trend.post_likes(), 188);
    assert!((trend.score() - 3.4621).abs() < 1e-9);
    let post = trend.thread().highlighted_post().unwrap();
    assert_eq!(post.raw_message(), "A long book.");
    assert_eq!(post.created_at(), Utc.with_ymd_and_hms(2017, 6, 11, 16, 2, 51).unwrap());
    assert_eq!(
        post.author().unwrap().joined_at(),
        Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap()
    );
}

#[tokio::test]
async fn test_thread_posts_and_votes() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/listPosts.json"))
        .and(query_param("thread", "5903616016"))
        .respond_with(ok(include_str!("fixtures/post_list.json")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/threads/listUsersVotedThread.json"))
        .and(query_param("thread", "5903616016"))
        .respond_with(ok(include_str!("fixtures/users_list.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let posts = client
        .thread_posts("5903616016", &Params::new())
        .await
        .unwrap();
    let voters = client
        .thread_users_voted("5903616016", &Params::new())
        .await
        .unwrap();

    // Assert
    assert_eq!(posts.response.len(), 2);
    assert_eq!(posts.response[1].parent(), Some(3_359_000_001));
    assert_eq!(voters.response[0].username(), "first");
}

#[tokio::test]
async fn test_thread_hot() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/listHot.json"))
        .respond_with(ok(include_str!("fixtures/threads_set.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let threads = client.thread_hot(&Params::new()).await.unwrap();

    // Assert
    assert_eq!(threads.response[1].title(), "First");
    assert_eq!(
        threads.response[1].created_at(),
        Utc.with_ymd_and_hms(2017, 6, 11, 10, 0, 0).unwrap()
    );
}
