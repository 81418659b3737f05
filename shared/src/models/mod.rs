//! Data models
//!
//! Shared between the HTTP client and the view controllers.
//! Wire field names are PascalCase, matching the backend's JSON.
//! All ids are `i64`; `0` marks a record that has not been created yet.

pub mod department;
pub mod employee;
pub mod resource;

// Re-exports
pub use department::*;
pub use employee::*;
pub use resource::*;
