//! Attachment controller error types.

use dropkit_shared::types::EntryId;
use thiserror::Error;

/// Errors raised by deletion commands.
///
/// Validation failures are never errors; they are carried on
/// [`RejectedEntry`](super::RejectedEntry) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// Index does not address an accepted entry.
    #[error("index {index} is out of range for {len} accepted entries")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of accepted entries at the time of the call.
        len: usize,
    },

    /// No accepted entry carries this identifier.
    #[error("accepted entry not found: {0}")]
    EntryNotFound(EntryId),
}

impl ControllerError {
    /// Create an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an entry not found error.
    #[must_use]
    pub fn entry_not_found(id: EntryId) -> Self {
        Self::EntryNotFound(id)
    }
}
