//! HTTP API layer for usra-rs.
//!
//! This crate provides the JSON API:
//!
//! - **Endpoints**: authentication, the registration wizard, school
//!   profiles and rosters, static association content
//! - **Extractors**: authenticated-account extraction
//! - **Middleware**: bearer-token authentication
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod content;
pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
