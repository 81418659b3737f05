//! Edit Session Controller
//!
//! Holds the one in-progress record behind the editor modal. The id
//! doubles as the mode discriminator on the wire (`0` means the draft
//! has never been saved), but the session tracks the mode explicitly
//! so the shell does not have to inspect ids.

use shared::Resource;
use validator::Validate;

use crate::error::{ViewError, ViewResult};
use crate::list::ListView;
use crate::notice::{EventSink, ViewEvent};

/// Whether the open editor creates a new record or updates an
/// existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Creating,
    Editing,
}

/// Controller behind the editor modal
pub struct EditSession<R: Resource> {
    draft: R,
    mode: EditMode,
    events: EventSink,
}

impl<R: Resource> EditSession<R> {
    /// New session holding an empty Creating draft
    pub fn new(events: EventSink) -> Self {
        Self {
            draft: R::draft(),
            mode: EditMode::Creating,
            events,
        }
    }

    /// Start a create session.
    ///
    /// Any uncommitted draft is discarded without warning, matching
    /// the original screens.
    pub fn begin_create(&mut self) {
        self.draft = R::draft();
        self.mode = EditMode::Creating;
    }

    /// Start editing an existing record (copies its fields)
    pub fn begin_edit(&mut self, record: &R) {
        self.draft = record.clone();
        self.mode = EditMode::Editing;
    }

    /// Assign one draft field from its string form.
    ///
    /// No required-field checking happens here; `commit` enforces
    /// that. Returns `false` for unknown fields or unparseable values.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        self.draft.set_field(name, value)
    }

    /// The in-progress record
    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Current mode
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// True while the draft has never been saved
    pub fn is_new(&self) -> bool {
        self.mode == EditMode::Creating
    }

    /// Persist the draft through the list controller.
    ///
    /// Required fields are checked first; a rejected draft never
    /// reaches the network. On success an `EditorClosed` event is
    /// emitted and the session resets to a fresh Creating draft; on
    /// failure the draft stays so the user can retry.
    pub async fn commit(&mut self, list: &mut ListView<R>) -> ViewResult<()> {
        let payload = self.draft.to_create();
        if let Err(errors) = payload.validate() {
            let message = errors.to_string();
            self.events.error(&message);
            return Err(ViewError::Validation(message));
        }

        let result = match self.mode {
            EditMode::Creating => list.create_entry(&payload).await,
            EditMode::Editing => list.update_entry(self.draft.id(), &self.draft).await,
        };

        if result.is_ok() {
            self.events.emit(ViewEvent::EditorClosed);
            self.begin_create();
        }
        result
    }
}
