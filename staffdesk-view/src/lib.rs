//! Staffdesk View - controller layer for the admin console
//!
//! Owns the state behind the department and employee screens: the
//! fetched collection and its filtered/sorted/reordered projection,
//! the in-progress editor draft, and the photo upload sub-session.
//! A presentation shell renders the state, invokes the operations and
//! subscribes to the event channel for notifications.

pub mod edit;
pub mod error;
pub mod list;
pub mod notice;
pub mod photo;

pub use edit::{EditMode, EditSession};
pub use error::{ViewError, ViewResult};
pub use list::ListView;
pub use notice::{EventSink, Severity, ViewEvent, messages};
pub use photo::PhotoUpload;

// Re-export shared types for convenience
pub use shared::{Department, Employee, Resource};
