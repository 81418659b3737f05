//! Staffdesk Client - HTTP client for the personnel REST API
//!
//! Provides the network side of the admin console: typed CRUD calls
//! against one resource endpoint plus the photo upload call.

pub mod config;
pub mod error;
pub mod http;
pub mod resource;
pub mod upload;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use resource::{CollectionClient, ResourceClient, SAVE_FILE_PATH};
pub use upload::AttachmentClient;

// Re-export shared types for convenience
pub use shared::{Department, DepartmentCreate, Employee, EmployeeCreate, Resource};
