//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway client, `auth` composes it into sign-in flows,
//! `transport` is the wire seam, and `types` defines the shared schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
