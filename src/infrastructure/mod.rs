//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for `POST /api/v1`
//! - [`clipboard`] - System clipboard and a no-op fallback
//! - [`surface`] - In-memory and terminal form surfaces

pub mod clipboard;
pub mod http;
pub mod surface;
