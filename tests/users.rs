#![allow(clippy::unwrap_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{client_for, ok};
use disqus_client::{time, Error, Params};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_user_details_sends_user() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/details.json"))
        .and(query_param("user", "195792235"))
        .respond_with(ok(include_str!("fixtures/user_details.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let user = client
        .user_details("195792235", &Params::new())
        .await
        .unwrap()
        .response;

    // Assert
    assert_eq!(user.username(), "disqus_test");
    assert_eq!(user.reputation_label(), Some("Average"));
    assert!((user.reputation() - 1.231_755).abs() < 1e-9);
    assert_eq!(user.joined_at(), Utc.with_ymd_and_hms(2016, 1, 29, 16, 33, 26).unwrap());
}

#[tokio::test]
async fn test_user_activities_decodes_fragments() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/listActivity.json"))
        .and(query_param("user", "195792235"))
        .respond_with(ok(include_str!("fixtures/user_activity.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let activity = client
        .user_activities("195792235", &Params::new())
        .await
        .unwrap();

    // Assert
    assert_eq!(activity.code, 0);
    assert_eq!(activity.cursor.unwrap().next, "1497349000:0:1");
    assert_eq!(activity.response.len(), 2);

    let post = &activity.response[0];
    assert_eq!(post.id(), "3360000000");
    assert_eq!(post.parent(), Some(3_356_547_778));
    assert_eq!(post.raw_message(), "Same here.");
    assert_eq!(time::format(&post.created_at()), "2017-06-13T09:00:00");
    assert_eq!(
        post.author().unwrap().joined_at(),
        Utc.with_ymd_and_hms(2016, 1, 29, 16, 33, 26).unwrap()
    );

    assert_eq!(activity.response[1].parent(), Some(3_359_000_001));
}

#[tokio::test]
async fn test_user_activities_rejects_unknown_fragment() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/listActivity.json"))
        .respond_with(ok(include_str!("fixtures/user_activity_unknown.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.user_activities("195792235", &Params::new()).await;

    // Assert
    assert!(matches!(result, Err(Error::Validation(ref msg)) if msg.contains("vote")));
}

#[tokio::test]
async fn test_user_activities_non_numeric_parent() {
    // Arrange
    let server = MockServer::start().await;
    let body = r#"{"code": 0, "response": [
        {"type": "reply", "object": {"id": "1", "createdAt": "2017-06-13T09:00:00", "parent": {"id": "not-a-number"}}}
    ]}"#;
    Mock::given(method("GET"))
        .and(path("/users/listActivity.json"))
        .respond_with(ok(body))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.user_activities("195792235", &Params::new()).await;

    // Assert
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn test_user_forum_lists_keep_microseconds() {
    // Arrange
    let server = MockServer::start().await;
    let body = r#"{"code": 0, "cursor": {"hasNext": false, "more": false},
                   "response": [{"id": "mapleleafshotstove", "createdAt": "2011-04-21T18:47:32.503946"}]}"#;
    for route in [
        "/users/listActiveForums.json",
        "/users/listMostActiveForums.json",
        "/users/listFollowingForums.json",
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param("user", "195792235"))
            .respond_with(ok(body))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);
    let params = Params::new();

    // Act
    let lists = [
        client.user_active_forums("195792235", &params).await.unwrap(),
        client.user_most_active_forums("195792235", &params).await.unwrap(),
        client.user_following_forums("195792235", &params).await.unwrap(),
    ];

    // Assert
    for forums in lists {
        assert_eq!(
            time::format_exact(&forums.response[0].created_at()),
            "2011-04-21T18:47:32.503946"
        );
    }
}

#[tokio::test]
async fn test_user_people_lists() {
    // Arrange
    let server = MockServer::start().await;
    for route in ["/users/listFollowers.json", "/users/listFollowing.json"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ok(include_str!("fixtures/users_list.json")))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);

    // Act
    let followers = client.user_followers("195792235", &Params::new()).await.unwrap();
    let following = client.user_following("195792235", &Params::new()).await.unwrap();

    // Assert
    assert_eq!(followers.response.len(), 2);
    assert_eq!(
        following.response[1].joined_at(),
        Utc.with_ymd_and_hms(2011, 6, 7, 8, 9, 10).unwrap()
    );
}

#[tokio::test]
async fn test_user_posts_and_interesting() {
    // Arrange
    let server = MockServer::start().await;
    let interesting = r#"{"code": 0, "response": {
        "items": [{"reason": "Active", "id": "users.User?id=2"}],
        "objects": {"users.User?id=2": {"id": "2", "username": "second", "joinedAt": "2011-06-07T08:09:10"}}
    }}"#;
    Mock::given(method("GET"))
        .and(path("/users/listPosts.json"))
        .and(query_param("user", "41234567"))
        .respond_with(ok(include_str!("fixtures/post_list.json")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/interestingUsers.json"))
        .respond_with(ok(interesting))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let posts = client.user_posts("41234567", &Params::new()).await.unwrap();
    let users = client.user_interesting(&Params::new()).await.unwrap();

    // Assert
    assert_eq!(posts.response.len(), 2);
    let ranked: Vec<_> = users.response.ranked().collect();
    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked[0].joined_at(),
        Utc.with_ymd_and_hms(2011, 6, 7, 8, 9, 10).unwrap()
    );
}

#[tokio::test]
async fn test_user_calls_without_id_send_nothing() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let params = Params::new();

    // Act
    let errors = [
        client.user_details("", &params).await.err(),
        client.user_posts("", &params).await.err(),
        client.user_activities("", &params).await.err(),
        client.user_active_forums("", &params).await.err(),
        client.user_most_active_forums("", &params).await.err(),
        client.user_followers("", &params).await.err(),
        client.user_following("", &params).await.err(),
        client.user_following_forums("", &params).await.err(),
    ];

    // Assert
    for error in errors {
        assert!(matches!(error, Some(Error::Validation(ref msg)) if msg.contains("user")));
    }
}
