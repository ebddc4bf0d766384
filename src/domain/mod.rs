//! Domain layer: data of a submission and the contracts around it.
//!
//! # Architecture
//!
//! - [`entities`] - Request, response and short link types
//! - [`form`] - Form fields, expiry parsing and control labels
//! - [`view`] - Presentational state ([`view::FormView`], [`view::Panel`])
//! - [`ports`] - Traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP, terminals or clipboards;
//! those live behind [`ports`].

pub mod entities;
pub mod form;
pub mod ports;
pub mod view;
