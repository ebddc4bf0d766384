//! reqwest-backed implementation of [`ShortenApi`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::Config;
use crate::domain::entities::{ShortLink, ShortenRequest, ShortenResponse};
use crate::domain::ports::ShortenApi;
use crate::error::FormError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Posts [`ShortenRequest`]s to a fixed endpoint, usually `{api_url}/api/v1`.
///
/// One attempt per call. No client-side timeout is configured, so a stalled
/// connection is bounded only by the OS.
#[derive(Debug, Clone)]
pub struct HttpShortenApi {
    client: Client,
    endpoint: Url,
}

impl HttpShortenApi {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Builds a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid or the TLS backend
    /// cannot be initialised.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        tracing::debug!(endpoint = %endpoint, "HTTP client ready");
        Ok(Self::with_client(client, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenApi for HttpShortenApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortLink, FormError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), len = bytes.len(), "Shorten response received");

        interpret_response(status, serde_json::from_slice(&bytes))
    }
}

/// Maps a status and a decoded (or undecodable) body to the outcome.
///
/// | status  | body        | outcome                                   |
/// |---------|-------------|-------------------------------------------|
/// | 2xx     | valid       | [`ShortLink`], or `Decode` without target |
/// | 2xx     | invalid     | `Decode` with the parser's description    |
/// | non-2xx | valid       | `Server` with the body's `error`          |
/// | non-2xx | invalid     | `Server` with the generic message         |
fn interpret_response(
    status: StatusCode,
    body: Result<ShortenResponse, serde_json::Error>,
) -> Result<ShortLink, FormError> {
    match (status.is_success(), body) {
        (true, Ok(body)) => ShortLink::try_from(body),
        (true, Err(e)) => Err(FormError::decode(format!("invalid response body: {e}"))),
        (false, Ok(body)) => Err(FormError::server(status.as_u16(), body.error)),
        (false, Err(e)) => {
            tracing::debug!(status = status.as_u16(), error = %e, "Error response body is not JSON");
            Err(FormError::server(status.as_u16(), None))
        }
    }
}
