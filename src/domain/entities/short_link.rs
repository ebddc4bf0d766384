//! The rendered outcome of a successful submission.

use chrono::{DateTime, Duration, Local};

use crate::domain::entities::ShortenResponse;
use crate::domain::form::strip_scheme;
use crate::error::FormError;

/// Quota information the server reports alongside a new link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuota {
    pub remaining: i64,
    pub reset_minutes: i64,
}

/// A short link ready to be shown in the result panel.
///
/// `target` is the full URL used as the link destination and for copying;
/// `display` is the same URL without its `http://` or `https://` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub target: String,
    pub display: String,
    pub long_url: Option<String>,
    pub expiry_hours: Option<i64>,
    pub quota: Option<RateQuota>,
}

impl ShortLink {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let display = strip_scheme(&target).to_string();
        Self {
            target,
            display,
            long_url: None,
            expiry_hours: None,
            quota: None,
        }
    }

    /// Local time at which the link stops resolving, when the server said.
    pub fn expires_at(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        self.expiry_hours
            .filter(|hours| *hours > 0)
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
    }
}

impl TryFrom<ShortenResponse> for ShortLink {
    type Error = FormError;

    fn try_from(body: ShortenResponse) -> Result<Self, Self::Error> {
        let target = body
            .custom_short
            .filter(|target| !target.is_empty())
            .ok_or_else(|| FormError::decode("response is missing custom_short"))?;

        let quota = match (body.rate_remaining, body.rate_limit_reset) {
            (Some(remaining), Some(reset_minutes)) => Some(RateQuota {
                remaining,
                reset_minutes,
            }),
            _ => None,
        };

        Ok(Self {
            long_url: body.url,
            expiry_hours: body.expiry,
            quota,
            ..Self::new(target)
        })
    }
}
