#![allow(clippy::unwrap_used)]

mod common;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use common::{client_for, ok, SECRET};
use disqus_client::{Client, Endpoints, Error, FormatError, Params, RateLimit};
use reqwest::StatusCode;
use wiremock::{
    matchers::{header, method},
    Mock, MockServer, ResponseTemplate,
};

const USERS: &str = include_str!("fixtures/users_list.json");

#[tokio::test]
async fn test_limits_come_from_last_response() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(USERS))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    assert_eq!(client.limits(), RateLimit::default());

    // Act
    client.forum_users("disqus", &Params::new()).await.unwrap();

    // Assert
    let limits = client.limits();
    assert_eq!(limits.remaining, 999);
    assert_eq!(limits.limit, 1000);
    assert_eq!(limits.reset_at, Utc.with_ymd_and_hms(2017, 5, 26, 8, 0, 0).unwrap());
}

#[tokio::test]
async fn test_error_status_still_updates_limits() {
    // Arrange
    let server = MockServer::start().await;
    let body = r#"{"code": 15, "response": "Internal server error"}"#;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("X-Ratelimit-Remaining", "998")
                .insert_header("X-Ratelimit-Limit", "1000")
                .insert_header("X-Ratelimit-Reset", "1495785600")
                .set_body_string(body),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let err = client.forum_users("disqus", &Params::new()).await.unwrap_err();

    // Assert
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(matches!(err, Error::Api { ref body, .. } if body.contains("Internal server error")));
    assert_eq!(client.limits().remaining, 998);
}

#[tokio::test]
async fn test_missing_limit_headers_reset_to_zero() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USERS))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    client.forum_users("disqus", &Params::new()).await.unwrap();

    // Assert
    assert_eq!(client.limits(), RateLimit::default());
}

#[tokio::test]
async fn test_malformed_limit_header_keeps_previous_snapshot() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(USERS))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Remaining", "lots")
                .set_body_string(USERS),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);
    client.forum_users("disqus", &Params::new()).await.unwrap();

    // Act
    let err = client.forum_users("disqus", &Params::new()).await.unwrap_err();

    // Assert
    assert!(matches!(err, Error::Format(FormatError::Header { ref value, .. }) if value == "lots"));
    assert_eq!(client.limits().remaining, 999);
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(r#"{"code": 0, "response": "#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.forum_users("disqus", &Params::new()).await;

    // Assert
    assert!(matches!(result, Err(Error::Decode(_))));
    assert_eq!(client.limits().limit, 1000);
}

#[tokio::test]
async fn test_mismatched_shape_is_decode_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(r#"{"code": 0, "response": {"not": "a list"}}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.thread_list(&Params::new()).await;

    // Assert
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn test_bad_timestamp_is_format_error() {
    // Arrange
    let server = MockServer::start().await;
    let body = r#"{"code": 0, "response": [{"id": "1", "joinedAt": "29/01/2016"}]}"#;
    Mock::given(method("GET"))
        .respond_with(ok(body))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.user_followers("1", &Params::new()).await;

    // Assert
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::Timestamp { ref value, .. })) if value == "29/01/2016"
    ));
}

#[tokio::test]
async fn test_empty_timestamp_is_zero() {
    // Arrange
    let server = MockServer::start().await;
    let body = r#"{"code": 0, "response": [{"id": "1", "joinedAt": ""}]}"#;
    Mock::given(method("GET"))
        .respond_with(ok(body))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let users = client.user_followers("1", &Params::new()).await.unwrap();

    // Assert
    assert_eq!(users.response[0].joined_at(), disqus_client::time::zero());
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("User-Agent", "test/0.0.0"))
        .respond_with(ok(USERS))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act & Assert (mock expect(1) verifies the header)
    client.forum_users("disqus", &Params::new()).await.unwrap();
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(USERS).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let client = Client::builder()
        .secret(SECRET)
        .endpoints(Endpoints::with_base(&server.uri()))
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    // Act
    let err = client.forum_users("disqus", &Params::new()).await.unwrap_err();

    // Assert
    assert!(matches!(err, Error::Transport(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Arrange
    let client = Client::builder()
        .secret(SECRET)
        .endpoints(Endpoints::with_base("http://127.0.0.1:1"))
        .build()
        .unwrap();

    // Act
    let result = client.forum_users("disqus", &Params::new()).await;

    // Assert
    assert!(matches!(result, Err(Error::Transport(_))));
}
