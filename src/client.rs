use std::{
    fmt,
    sync::{PoisonError, RwLock},
    time::Duration,
};

use crate::{
    endpoints::Endpoints,
    error::Error,
    models::{Envelope, Normalize},
    params::Params,
    rate_limit::RateLimit,
    result::Result,
};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;

const DEFAULT_USER_AGENT: &str = concat!("disqus-client/", env!("CARGO_PKG_VERSION"));

/// Handle through which every API operation is called.
///
/// The handle owns the API secret and the rate-limit snapshot of the last
/// response it received. Calls made concurrently through the same handle
/// overwrite that snapshot in whatever order they complete.
pub struct Client {
    http: ReqwestClient,
    secret: String,
    endpoints: Endpoints,
    limits: RwLock<RateLimit>,
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    secret: Option<String>,
    endpoints: Option<Endpoints>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Sets the API secret (required).
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Overrides the URL tables, e.g. to reach a mock server.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a timeout covering each request from connect to end of body.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if no secret, or an empty one, was given.
    /// - [`Error::Transport`] if the HTTP client cannot be set up.
    pub fn build(self) -> Result<Client> {
        let secret = self
            .secret
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Validation(String::from("must provide an API secret")))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        let mut http = ReqwestClient::builder().user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            http: http.build()?,
            secret,
            endpoints: self.endpoints.unwrap_or_default(),
            limits: RwLock::new(RateLimit::default()),
        })
    }
}

impl Client {
    /// Creates a client for the public API.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(secret: impl Into<String>) -> Result<Client> {
        Self::builder().secret(secret).build()
    }

    /// Creates a new builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Rate-limit snapshot taken from the last response received.
    pub fn limits(&self) -> RateLimit {
        *self.limits.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// The URL tables this client sends requests to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Copies the caller's parameters and injects the secret.
    pub(crate) fn query(&self, params: &Params) -> Params {
        let mut query = params.clone();
        query.replace(String::from("api_secret"), self.secret.clone());
        query
    }

    /// Like [`Client::query`], also injecting a required identifier under `key`.
    pub(crate) fn query_with_id(&self, params: &Params, key: &str, id: &str) -> Result<Params> {
        if id.is_empty() {
            return Err(Error::missing(key));
        }
        let mut query = self.query(params);
        query.replace(key.to_string(), id.to_string());
        Ok(query)
    }

    /// Like [`Client::query_with_id`] for operations taking several identifiers,
    /// each sent as its own `key=` pair in the order given.
    pub(crate) fn query_with_ids<S: AsRef<str>>(
        &self,
        params: &Params,
        key: &str,
        ids: &[S],
    ) -> Result<Params> {
        if ids.is_empty() || ids.iter().any(|id| id.as_ref().is_empty()) {
            return Err(Error::Validation(format!("must provide one or more {key} ids")));
        }
        let mut query = self.query(params);
        query.replace_all(key, ids.iter().map(|id| id.as_ref().to_string()));
        Ok(query)
    }

    /// Fetches an envelope and normalizes every timestamp in it.
    pub(crate) async fn get<T>(&self, base: &str, query: &Params) -> Result<Envelope<T>>
    where
        T: DeserializeOwned + Normalize,
    {
        let mut envelope: Envelope<T> = self.fetch_json(base, query).await?;
        log::trace!("normalizing timestamps of {base}");
        envelope.normalize()?;
        Ok(envelope)
    }

    /// Sends one GET to `base?query` and decodes the body as `T`.
    ///
    /// The rate-limit snapshot is replaced as soon as a response arrives,
    /// whatever its status.
    pub(crate) async fn fetch_json<T>(&self, base: &str, query: &Params) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = assemble(base, query);

        // the query string carries the secret, only the endpoint is logged
        log::debug!("request for {base} dispatched");
        let response = self.http.get(url).send().await?;

        let limits = RateLimit::from_headers(response.headers())?;
        *self.limits.write().unwrap_or_else(PoisonError::into_inner) = limits;

        let status = response.status();
        log::debug!("response status: {status}, limits: {limits:?}");

        if status != StatusCode::OK {
            let body = response.text().await?;
            log::warn!("{base} answered {status}");
            return Err(Error::Api { status, body });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("secret", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("limits", &self.limits())
            .finish_non_exhaustive()
    }
}

pub(crate) fn assemble(base: &str, query: &Params) -> String {
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", query.encode())
    }
}
