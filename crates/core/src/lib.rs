//! Attachment controller and validation pipeline for Dropkit.
//!
//! This crate contains the attachment state machine with ZERO rendering or
//! transport dependencies. A UI layer feeds it input-change and drop events
//! and renders from its snapshots.
//!
//! # Modules
//!
//! - `validation` - Size and type checks against a policy
//! - `event` - Attach events and file extraction
//! - `attachment` - The controller owning accepted/rejected/removed files
//! - `preview` - Preview references for locally attached files
//! - `props` - Bindings for the rendering layer

pub mod attachment;
pub mod event;
pub mod preview;
pub mod props;
pub mod validation;

pub use attachment::{
    AcceptedEntry, AttachOutcome, AttachmentController, ControllerError, ControllerOptions,
    FileHandle, RejectedEntry, RemovedUri,
};
pub use event::{AttachEvent, files_from_event};
pub use validation::{ErrorReason, FILE_TYPE_ERROR, MAX_SIZE_ERROR, Policy, validate_file};
