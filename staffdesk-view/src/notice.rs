//! View events forwarded to the presentation shell
//!
//! Controllers never touch the presentation directly; they push
//! events into a channel the shell subscribes to. This replaces the
//! original screens' habit of reaching into the DOM to dismiss the
//! modal.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// Fixed user-facing notification messages.
pub mod messages {
    pub const CREATE_OK: &str = "Record created successfully";
    pub const UPDATE_OK: &str = "Record updated successfully";
    pub const DELETE_OK: &str = "Record deleted successfully";
    pub const CREATE_FAILED: &str = "Failed to create record";
    pub const UPDATE_FAILED: &str = "Failed to update record";
    pub const DELETE_FAILED: &str = "Failed to delete record";
    pub const FETCH_FAILED: &str = "Failed to fetch data";
    pub const UPLOAD_FAILED: &str = "Failed to upload image";
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Event emitted by a controller for the shell to consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// User-facing toast message
    Notice {
        severity: Severity,
        message: String,
    },
    /// A commit succeeded; the shell should close the editor
    EditorClosed,
}

/// Handle the controllers push events through.
///
/// A detached sink (or one whose receiver has been dropped) discards
/// events silently; controllers never block on the shell.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<UnboundedSender<ViewEvent>>,
}

impl EventSink {
    /// Sink delivering into the given channel
    pub fn attached(tx: UnboundedSender<ViewEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Sink that discards every event
    pub fn detached() -> Self {
        Self { tx: None }
    }

    /// Push an event, ignoring a missing or closed receiver
    pub fn emit(&self, event: ViewEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }

    /// Push a success notice
    pub fn success(&self, message: &str) {
        self.emit(ViewEvent::Notice {
            severity: Severity::Success,
            message: message.to_string(),
        });
    }

    /// Push an error notice
    pub fn error(&self, message: &str) {
        self.emit(ViewEvent::Notice {
            severity: Severity::Error,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = ViewEvent::Notice {
            severity: Severity::Error,
            message: messages::FETCH_FAILED.to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"notice","severity":"error","message":"Failed to fetch data"}"#
        );

        let closed = serde_json::to_string(&ViewEvent::EditorClosed).unwrap();
        assert_eq!(closed, r#"{"type":"editor_closed"}"#);
    }

    #[test]
    fn test_detached_sink_discards() {
        let sink = EventSink::detached();
        sink.success("nothing listens");
    }

    #[test]
    fn test_attached_sink_delivers() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let sink = EventSink::attached(tx);
        sink.error(messages::DELETE_FAILED);

        let event = rx.try_recv().unwrap();
        assert_eq!(
            event,
            ViewEvent::Notice {
                severity: Severity::Error,
                message: messages::DELETE_FAILED.to_string(),
            }
        );
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        let sink = EventSink::attached(tx);
        sink.emit(ViewEvent::EditorClosed);
    }
}
