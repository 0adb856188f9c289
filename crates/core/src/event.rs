//! Attach events delivered by the rendering layer.
//!
//! Two kinds of events carry files: a file-chooser input reporting a new
//! selection, and a drop target receiving a drag-and-drop payload.

use serde::Serialize;

use crate::attachment::FileHandle;

/// Payload of a drop event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataTransfer {
    /// Dropped files, in platform order.
    pub files: Vec<FileHandle>,
}

/// Target of an input change event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputTarget {
    /// Files currently selected in the input.
    pub files: Vec<FileHandle>,
}

/// What an attach event carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// Files dropped onto the root element.
    Drop {
        /// Transfer payload.
        data_transfer: DataTransfer,
    },
    /// Files chosen through the input element.
    Change {
        /// Event target.
        target: InputTarget,
    },
}

/// An event that may attach files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachEvent {
    payload: EventPayload,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl AttachEvent {
    /// Create an input change event.
    #[must_use]
    pub fn change(files: Vec<FileHandle>) -> Self {
        Self::from_payload(EventPayload::Change {
            target: InputTarget { files },
        })
    }

    /// Create a drop event.
    #[must_use]
    pub fn drop(files: Vec<FileHandle>) -> Self {
        Self::from_payload(EventPayload::Drop {
            data_transfer: DataTransfer { files },
        })
    }

    /// Create an event from a payload.
    #[must_use]
    pub fn from_payload(payload: EventPayload) -> Self {
        Self {
            payload,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// The event payload.
    #[must_use]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// The transfer payload, present only on drop events.
    #[must_use]
    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        match &self.payload {
            EventPayload::Drop { data_transfer } => Some(data_transfer),
            EventPayload::Change { .. } => None,
        }
    }

    /// Whether this is a drop event.
    #[must_use]
    pub fn is_drop(&self) -> bool {
        self.data_transfer().is_some()
    }

    /// Suppress the platform's default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching enclosing handlers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether default handling was suppressed.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether propagation was stopped.
    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Extracts candidate files from an attach event.
///
/// The event is always consumed: default handling is suppressed (so a
/// browser does not navigate to a dropped file) and propagation is stopped.
pub fn files_from_event(event: &mut AttachEvent) -> Vec<FileHandle> {
    event.stop_propagation();
    event.prevent_default();

    match &event.payload {
        EventPayload::Drop { data_transfer } => data_transfer.files.clone(),
        EventPayload::Change { target } => target.files.clone(),
    }
}
