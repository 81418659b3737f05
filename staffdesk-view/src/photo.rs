//! Upload Sub-session (employee photo)
//!
//! Sends one file to the upload endpoint and merges the stored
//! filename into the active edit session's `PhotoFileName` field.

use shared::Resource;
use staffdesk_client::AttachmentClient;

use crate::edit::EditSession;
use crate::error::ViewResult;
use crate::notice::{EventSink, messages};

/// Controller behind the photo picker
pub struct PhotoUpload {
    client: Box<dyn AttachmentClient>,
    photo_url: String,
    events: EventSink,
}

impl PhotoUpload {
    /// Create an upload sub-session
    pub fn new(
        client: impl AttachmentClient + 'static,
        photo_url: impl Into<String>,
        events: EventSink,
    ) -> Self {
        Self {
            client: Box::new(client),
            photo_url: photo_url.into(),
            events,
        }
    }

    /// Display URL for a stored photo filename
    pub fn display_url(&self, filename: &str) -> String {
        format!("{}{}", self.photo_url, filename)
    }

    /// Upload the file and attach the stored filename to the draft.
    ///
    /// On success the draft's `PhotoFileName` is replaced with the
    /// server-returned name and the new display URL is returned. On
    /// failure the previous filename stays intact.
    pub async fn upload_and_attach<R: Resource>(
        &self,
        session: &mut EditSession<R>,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ViewResult<String> {
        match self.client.upload(file_name, bytes).await {
            Ok(stored) => {
                session.set_field("PhotoFileName", &stored);
                Ok(self.display_url(&stored))
            }
            Err(err) => {
                tracing::warn!(file_name, error = %err, "Upload failed");
                self.events.error(messages::UPLOAD_FAILED);
                Err(err.into())
            }
        }
    }
}
