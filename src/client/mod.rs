//! Records API client
//!
//! Thin async wrapper over the remote REST service. Every call carries the
//! caller's credential in the configured auth header; responses are JSON.

mod error;
mod hierarchy;
mod documents;
mod requests;
mod users;

pub use error::ClientError;
pub use requests::{RequestKind, RequestRecord};

use reqwest::header::{HeaderName, ACCEPT};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::config::UpstreamConfig;

pub type ClientResult<T> = Result<T, ClientError>;

/// Opaque session token forwarded to the records API
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth_header: HeaderName,
}

impl ApiClient {
    pub fn new(config: &UpstreamConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        let auth_header = HeaderName::from_bytes(config.auth_header.as_bytes())
            .map_err(|_| ClientError::InvalidHeader(config.auth_header.clone()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_header,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `endpoint`. The id, when present, is appended as a
    /// single percent-encoded path segment.
    fn url(&self, endpoint: &Endpoint<'_>) -> ClientResult<Url> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint.path);
        let mut url =
            Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", joined, e)))?;
        if let Some(id) = endpoint.id {
            if id.is_empty() || id == "." || id == ".." {
                return Err(ClientError::InvalidPathSegment(id.to_string()));
            }
            url.path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(joined.clone()))?
                .push(id);
        }
        Ok(url)
    }

    fn build_request(
        &self,
        method: Method,
        endpoint: &Endpoint<'_>,
        cred: &Credential,
    ) -> ClientResult<RequestBuilder> {
        let url = self.url(endpoint)?;
        tracing::debug!("{} {}", method, url.path());
        Ok(self
            .http
            .request(method, url)
            .header(self.auth_header.clone(), cred.as_str())
            .header(ACCEPT, "application/json"))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let bytes = self.execute(builder).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let err = ClientError::from_response(status, &bytes);
            tracing::warn!("Upstream request failed: {}", err);
            return Err(err);
        }
        Ok(bytes.to_vec())
    }

    pub(crate) async fn get<'e, T: DeserializeOwned>(
        &self,
        endpoint: impl Into<Endpoint<'e>>,
        cred: &Credential,
    ) -> ClientResult<T> {
        let builder = self.build_request(Method::GET, &endpoint.into(), cred)?;
        self.send(builder).await
    }

    pub(crate) async fn get_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        cred: &Credential,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.build_request(Method::GET, &Endpoint::from(path), cred)?;
        self.send(builder.query(query)).await
    }

    pub(crate) async fn post<'e, B, T>(
        &self,
        endpoint: impl Into<Endpoint<'e>>,
        body: &B,
        cred: &Credential,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.build_request(Method::POST, &endpoint.into(), cred)?;
        self.send(builder.json(body)).await
    }

    pub(crate) async fn put<'e, B, T>(
        &self,
        endpoint: impl Into<Endpoint<'e>>,
        body: &B,
        cred: &Credential,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.build_request(Method::PUT, &endpoint.into(), cred)?;
        self.send(builder.json(body)).await
    }

    pub(crate) async fn delete<'e>(
        &self,
        endpoint: impl Into<Endpoint<'e>>,
        cred: &Credential,
    ) -> ClientResult<()> {
        let builder = self.build_request(Method::DELETE, &endpoint.into(), cred)?;
        self.execute(builder).await.map(|_| ())
    }
}

/// Upstream route: a fixed path, optionally followed by one id segment
#[derive(Clone, Copy, Debug)]
pub(crate) struct Endpoint<'a> {
    path: &'a str,
    id: Option<&'a str>,
}

impl<'a> From<&'a str> for Endpoint<'a> {
    fn from(path: &'a str) -> Self {
        Self { path, id: None }
    }
}

impl<'a> From<(&'a str, &'a str)> for Endpoint<'a> {
    fn from((path, id): (&'a str, &'a str)) -> Self {
        Self { path, id: Some(id) }
    }
}
