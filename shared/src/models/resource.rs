//! Resource trait
//!
//! One implementation per record type managed through a REST
//! collection endpoint. The view layer filters, sorts and edits by
//! wire field name, so records expose string-keyed field access.

use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

/// A record type managed through one REST collection endpoint.
pub trait Resource:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload posted when the draft has no server id yet.
    type Create: Serialize + Validate + Send + Sync;

    /// Collection path relative to the API base URL (e.g. `department`).
    const PATH: &'static str;

    /// Human-readable label used in notification messages.
    const LABEL: &'static str;

    /// Server-assigned identity; `0` marks an unsaved draft.
    fn id(&self) -> i64;

    /// Wire field names, in display order.
    fn field_names() -> &'static [&'static str];

    /// Stringified value of a field (ids in decimal).
    ///
    /// Returns `None` for unknown field names.
    fn field(&self, name: &str) -> Option<String>;

    /// Assign a field from its string form.
    ///
    /// Returns `false` when the name is unknown, the field is
    /// read-only (the id) or the value does not parse into the
    /// field's type. No required-field checking happens here; that is
    /// deferred to commit time.
    fn set_field(&mut self, name: &str, value: &str) -> bool;

    /// Empty draft with field defaults and the `0` id sentinel.
    fn draft() -> Self;

    /// Create payload carrying this record's fields, minus the id.
    ///
    /// Text fields are trimmed here so the commit-time validation
    /// rejects whitespace-only input.
    fn to_create(&self) -> Self::Create;
}
