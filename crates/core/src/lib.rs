//! Core business logic for usra-rs.

pub mod registration;
pub mod services;

pub use registration::*;
pub use services::*;

/// Generate a unique ID using ULID.
#[must_use]
pub fn generate_id() -> String {
    ulid::Ulid::new().to_string().to_lowercase()
}
