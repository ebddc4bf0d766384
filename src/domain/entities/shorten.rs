//! Wire types for the `/api/v1` shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::form::FormFields;

/// Body of `POST /api/v1`.
///
/// Built fresh from the form on every submission. `expiry` is `None` when the
/// field did not parse as an integer and goes over the wire as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    pub custom_short: String,
    pub expiry: Option<i64>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>, custom_short: impl Into<String>, expiry: Option<i64>) -> Self {
        Self {
            url: url.into(),
            custom_short: custom_short.into(),
            expiry,
        }
    }
}

impl From<&FormFields> for ShortenRequest {
    fn from(fields: &FormFields) -> Self {
        Self {
            url: fields.url.clone(),
            custom_short: fields.custom_short.clone(),
            expiry: fields.parsed_expiry(),
        }
    }
}

/// Response body of `/api/v1`, success or failure alike.
///
/// Every field is optional because the body is decoded before the status is
/// inspected. A success carries `custom_short`; a failure carries `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    pub custom_short: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Normalized long URL as stored by the server.
    #[serde(default)]
    pub url: Option<String>,
    /// Link lifetime in hours.
    #[serde(default)]
    pub expiry: Option<i64>,
    /// Requests left in the current quota window.
    #[serde(default)]
    pub rate_remaining: Option<i64>,
    /// Minutes until the quota window resets.
    #[serde(default)]
    pub rate_limit_reset: Option<i64>,
}
