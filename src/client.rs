//! HTTP client for the monobank personal API.

use core::future::Future;
use core::time::Duration;

use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;

use crate::api::BankApi;
use crate::cache::{DEFAULT_TTL, ResponseCache};
use crate::error::{DashboardError, Result};
use crate::models::{AccountId, ClientInfo, StatementWindow, Transaction};

/// Base URL for the monobank API.
pub const DEFAULT_BASE_URL: &str = "https://api.monobank.ua";

/// Client info endpoint path.
const CLIENT_INFO_PATH: &str = "/personal/client-info";

/// Statement endpoint path prefix.
const STATEMENT_PATH: &str = "/personal/statement";

/// Header carrying the personal token.
const TOKEN_HEADER: &str = "X-Token";

/// Builder for constructing a [`MonobankClient`].
#[derive(Debug)]
pub struct MonobankClientBuilder {
    /// Personal API token.
    token: Option<SecretString>,
    /// Base URL override (for testing).
    base_url: Option<String>,
    /// Response cache lifetime override.
    cache_ttl: Option<Duration>,
}

impl MonobankClientBuilder {
    /// Sets the personal API token sent in the `X-Token` header.
    ///
    /// An empty token is accepted; the API rejects it on the first request.
    #[inline]
    #[must_use]
    pub fn token<T: Into<SecretString>>(mut self, token: T) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the base URL (useful for testing with a mock server).
    #[inline]
    #[must_use]
    pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets how long successful responses are reused. Zero disables the
    /// cache.
    #[inline]
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingToken`] if no token was provided.
    /// Returns [`DashboardError::InvalidUrl`] if the base URL does not parse.
    /// Returns [`DashboardError::Http`] if the HTTP client fails to build.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn build(self) -> Result<MonobankClient> {
        let token = self.token.ok_or(DashboardError::MissingToken)?;
        let raw_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let _parsed = url::Url::parse(&raw_url)?;
        let base_url = raw_url.trim_end_matches('/').to_owned();
        let cache = ResponseCache::new(self.cache_ttl.unwrap_or(DEFAULT_TTL));
        tracing::debug!(base_url = %base_url, cache_ttl = ?cache.ttl(), "building client");
        let http = reqwest::Client::builder().build()?;

        Ok(MonobankClient {
            http,
            token,
            base_url,
            cache,
        })
    }
}

/// Async client for the monobank personal API, bound to one token.
///
/// Use [`MonobankClient::builder()`] to construct an instance.
#[derive(Debug)]
pub struct MonobankClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Personal API token.
    token: SecretString,
    /// API base URL without a trailing slash.
    base_url: String,
    /// Recently fetched response bodies.
    cache: ResponseCache,
}

impl MonobankClient {
    /// Creates a new builder for configuring the client.
    #[inline]
    #[must_use]
    pub const fn builder() -> MonobankClientBuilder {
        MonobankClientBuilder {
            token: None,
            base_url: None,
            cache_ttl: None,
        }
    }

    /// Sends an authenticated GET request and deserializes the response,
    /// serving it from the cache under `cache_key` while fresh.
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn get_json<Resp: DeserializeOwned>(&self, path: &str, cache_key: &str) -> Result<Resp> {
        if let Some(body) = self.cache.get(cache_key)? {
            tracing::debug!(cache_key, "serving cached response");
            return serde_json::from_str(&body).map_err(DashboardError::from);
        }

        let url = format!("{}{path}", self.base_url);
        tracing::trace!(url = %url, "sending GET request");
        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, self.token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "received response");
        if status.is_success() {
            let body = response.text().await?;
            tracing::trace!(body_len = body.len(), "parsing response body");
            let parsed = serde_json::from_str(&body)?;
            self.cache.insert(cache_key.to_owned(), body)?;
            Ok(parsed)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            tracing::debug!(status = status.as_u16(), message = %message, "API error");
            Err(DashboardError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl BankApi for MonobankClient {
    #[inline]
    fn client_info(&self) -> impl Future<Output = Result<ClientInfo>> + Send {
        tracing::debug!("calling client-info endpoint");
        self.get_json::<ClientInfo>(CLIENT_INFO_PATH, "client-info")
    }

    #[inline]
    fn statement(
        &self,
        account: &AccountId,
        window: StatementWindow,
    ) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        tracing::debug!(account = %account, "calling statement endpoint");
        // The window moves with the clock, so the cache is keyed by account only.
        let path = format!("{STATEMENT_PATH}/{account}/{}", window.path_segment());
        let cache_key = format!("statement/{account}");
        async move { self.get_json::<Vec<Transaction>>(&path, &cache_key).await }
    }
}
