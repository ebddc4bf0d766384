//! HTTP client for the remote shortening API.

mod shorten_client;

pub use shorten_client::HttpShortenApi;
