//! Shared types for the Staffdesk admin console
//!
//! Wire-format data models exchanged with the personnel REST API and
//! the [`Resource`](models::Resource) trait that parameterizes the
//! HTTP client and the view controllers over the record types.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    DEFAULT_PHOTO, Department, DepartmentCreate, Employee, EmployeeCreate, Resource,
};
