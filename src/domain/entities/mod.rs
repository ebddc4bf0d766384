//! Request, response and result types of a shortening round-trip.
//!
//! - [`ShortenRequest`] / [`ShortenResponse`] - the `/api/v1` wire format
//! - [`ShortLink`] - what the result panel shows after a success
//! - [`RateQuota`] - quota counters the server reports with a success

pub mod short_link;
pub mod shorten;

pub use short_link::{RateQuota, ShortLink};
pub use shorten::{ShortenRequest, ShortenResponse};
