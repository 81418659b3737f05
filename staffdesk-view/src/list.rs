//! List View State Controller
//!
//! Owns two sequences per resource: `canonical`, the collection as
//! last fetched from the server, and `view`, the filtered/sorted and
//! possibly hand-reordered projection the shell renders. Filter and
//! sort always re-derive `view` from `canonical`; drag reorder
//! permutes `view` only and is never sent to the server.

use std::cmp::Ordering;
use std::collections::HashMap;

use shared::Resource;
use staffdesk_client::CollectionClient;

use crate::error::{ViewError, ViewResult};
use crate::notice::{EventSink, messages};

/// Controller behind one list screen
pub struct ListView<R: Resource> {
    client: Box<dyn CollectionClient<R>>,
    canonical: Vec<R>,
    view: Vec<R>,
    filters: HashMap<String, String>,
    events: EventSink,
}

impl<R: Resource> ListView<R> {
    /// Create a controller with an empty collection
    pub fn new(client: impl CollectionClient<R> + 'static, events: EventSink) -> Self {
        Self {
            client: Box::new(client),
            canonical: Vec::new(),
            view: Vec::new(),
            filters: HashMap::new(),
            events,
        }
    }

    /// The projection the shell renders
    pub fn view(&self) -> &[R] {
        &self.view
    }

    /// The collection as last fetched from the server
    pub fn canonical(&self) -> &[R] {
        &self.canonical
    }

    /// Active filters (field name to needle)
    pub fn filters(&self) -> &HashMap<String, String> {
        &self.filters
    }

    /// Reload the collection from the server.
    ///
    /// On success `canonical` is replaced wholesale and `view` is
    /// re-derived through the active filters. On failure both stay
    /// exactly as they were, so the shell keeps showing the previous
    /// (stale but present) list.
    pub async fn refresh(&mut self) -> ViewResult<()> {
        match self.client.fetch_all().await {
            Ok(records) => {
                self.canonical = records;
                self.view = self.apply_filters();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, error = %err, "Refresh failed");
                self.events.error(messages::FETCH_FAILED);
                Err(err.into())
            }
        }
    }

    /// Set or clear one field's filter and re-derive the view.
    ///
    /// The needle is trimmed and matched case-insensitively as a
    /// substring of the record's stringified field; a record passes
    /// only if every non-empty filter matches.
    pub fn set_filter(&mut self, field: &str, value: &str) {
        let needle = value.trim().to_lowercase();
        if needle.is_empty() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), needle);
        }
        self.view = self.apply_filters();
    }

    /// Drop all filters and re-derive the view
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.view = self.apply_filters();
    }

    /// Sort the view by one field.
    ///
    /// Sorts the re-filtered canonical collection, so any manual
    /// reorder is discarded. Values that parse as integers (the ids)
    /// compare numerically, everything else byte-wise.
    pub fn sort(&mut self, field: &str, ascending: bool) {
        let mut rows = self.apply_filters();
        rows.sort_by(|a, b| {
            let av = a.field(field).unwrap_or_default();
            let bv = b.field(field).unwrap_or_default();
            let ord = compare_values(&av, &bv);
            if ascending { ord } else { ord.reverse() }
        });
        self.view = rows;
    }

    /// Move the view entry at `from` so it sits at `to`.
    ///
    /// Pure permutation of `view`; `canonical` is untouched and
    /// nothing is persisted. Out-of-range indices leave the view
    /// unchanged.
    pub fn move_entry(&mut self, from: usize, to: usize) -> ViewResult<()> {
        let len = self.view.len();
        if from >= len {
            return Err(ViewError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ViewError::IndexOutOfRange { index: to, len });
        }
        let row = self.view.remove(from);
        self.view.insert(to, row);
        Ok(())
    }

    /// Create a record, then reload from the server.
    ///
    /// The returned result reflects the create alone: once the server
    /// has accepted the record, a failed reload only leaves the list
    /// stale and is reported through `refresh`'s own notice. Retrying
    /// the create at that point would duplicate the record.
    pub async fn create_entry(&mut self, payload: &R::Create) -> ViewResult<()> {
        match self.client.create(payload).await {
            Ok(created) => {
                tracing::debug!(resource = R::PATH, id = created.id(), "Created");
                self.events.success(messages::CREATE_OK);
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, error = %err, "Create failed");
                self.events.error(messages::CREATE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Update a record, then reload from the server.
    ///
    /// As with `create_entry`, the result reflects the update alone.
    pub async fn update_entry(&mut self, id: i64, record: &R) -> ViewResult<()> {
        match self.client.update(id, record).await {
            Ok(_) => {
                self.events.success(messages::UPDATE_OK);
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, id, error = %err, "Update failed");
                self.events.error(messages::UPDATE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Delete a record, then reload from the server.
    ///
    /// As with `create_entry`, the result reflects the delete alone.
    pub async fn delete_entry(&mut self, id: i64) -> ViewResult<()> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.events.success(messages::DELETE_OK);
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, id, error = %err, "Delete failed");
                self.events.error(messages::DELETE_FAILED);
                Err(err.into())
            }
        }
    }

    fn apply_filters(&self) -> Vec<R> {
        self.canonical
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    fn matches(&self, record: &R) -> bool {
        self.filters.iter().all(|(field, needle)| {
            record
                .field(field)
                .map(|value| value.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false)
        })
    }
}

/// Three-way ordinal comparison of stringified field values
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
