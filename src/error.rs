//! Error taxonomy for form submissions and clipboard writes.
//!
//! Every variant is recoverable: the controller turns it into a user-visible
//! message and the user resubmits or retries the copy manually.

use thiserror::Error;

/// Message shown when the server rejects a request without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Non-success HTTP status. `message` is the body's `error` field, or
    /// [`GENERIC_FAILURE_MESSAGE`] when the body had none.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never completed (connect, TLS, or body read failure).
    #[error("{0}")]
    Network(String),

    /// A success status whose body could not be turned into a short link.
    #[error("{0}")]
    Decode(String),

    /// The clipboard rejected the write.
    #[error("{0}")]
    Clipboard(String),
}

impl FormError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        Self::Server { status, message }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn clipboard(err: impl std::fmt::Display) -> Self {
        Self::Clipboard(err.to_string())
    }

    /// Text for the error panel, e.g. `Error: custom alias already in use`.
    pub fn panel_message(&self) -> String {
        format!("Error: {self}")
    }

    /// Short label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Server { .. } => "server",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Clipboard(_) => "clipboard",
        }
    }
}

impl From<reqwest::Error> for FormError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err)
    }
}
