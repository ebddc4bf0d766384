//! Port for the remote shortening endpoint.

use crate::domain::entities::{ShortLink, ShortenRequest};
use crate::error::FormError;
use async_trait::async_trait;

/// Sends one shortening request and interprets the answer.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenApi`] - `POST /api/v1` over reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// Submits `request` once. No retry, no timeout beyond the transport's own.
    ///
    /// # Errors
    ///
    /// - [`FormError::Server`] for a non-success status
    /// - [`FormError::Network`] when the request never completes
    /// - [`FormError::Decode`] when a success body has no usable `custom_short`
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortLink, FormError>;
}
