#![allow(dead_code, clippy::unwrap_used)]

use disqus_client::{Client, Endpoints};
use wiremock::{MockServer, ResponseTemplate};

pub const SECRET: &str = "test-secret";

/// A client whose every endpoint points at `server`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .secret(SECRET)
        .endpoints(Endpoints::with_base(&server.uri()))
        .user_agent("test/0.0.0")
        .build()
        .unwrap()
}

/// A 200 response carrying `body` and a full set of rate-limit headers.
pub fn ok(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/json")
        .insert_header("X-Ratelimit-Remaining", "999")
        .insert_header("X-Ratelimit-Limit", "1000")
        .insert_header("X-Ratelimit-Reset", "1495785600")
        .set_body_string(body)
}

/// Every value sent under `key` in the single request `server` received.
pub async fn sent_values(server: &MockServer, key: &str) -> Vec<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}
