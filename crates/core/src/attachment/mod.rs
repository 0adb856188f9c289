//! Attachment state management.
//!
//! This module provides the attachment controller:
//! - Accepted, rejected and removed file sets
//! - Single and multiple selection policies
//! - Index and identity based deletion
//! - Attach listeners

mod controller;
mod error;
mod types;

#[cfg(test)]
mod controller_props;

pub use controller::{AttachListener, AttachmentController, ControllerOptions};
pub use error::ControllerError;
pub use types::{AcceptedEntry, AttachOutcome, FileHandle, RejectedEntry, RemovedUri};
