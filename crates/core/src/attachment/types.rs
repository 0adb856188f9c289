//! Attachment types and data structures.

use dropkit_shared::types::EntryId;
use serde::{Deserialize, Serialize};

use crate::preview::PreviewUri;
use crate::validation::ErrorReason;

/// Metadata of a candidate file.
///
/// Only the name, declared MIME type and size take part in validation; file
/// content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// File name including extension.
    pub name: String,
    /// Declared MIME type, if the platform reported one.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl FileHandle {
    /// Create a file handle without a MIME type.
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            size_bytes,
        }
    }

    /// Set the declared MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// An entry in the accepted sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AcceptedEntry {
    /// A locally chosen file that passed validation.
    Local {
        /// Entry identifier.
        id: EntryId,
        /// The attached file.
        file: FileHandle,
        /// Preview reference minted for the file.
        preview: PreviewUri,
    },
    /// A file uploaded in an earlier session, known only by its URI.
    Uploaded {
        /// Entry identifier.
        id: EntryId,
        /// Remote URI of the file.
        uri: String,
    },
}

impl AcceptedEntry {
    /// Create an entry for a previously uploaded file.
    #[must_use]
    pub fn uploaded(uri: impl Into<String>) -> Self {
        Self::Uploaded {
            id: EntryId::new(),
            uri: uri.into(),
        }
    }

    /// Entry identifier.
    #[must_use]
    pub fn id(&self) -> EntryId {
        match self {
            Self::Local { id, .. } | Self::Uploaded { id, .. } => *id,
        }
    }

    /// The local file, if this entry was attached in this session.
    #[must_use]
    pub fn file(&self) -> Option<&FileHandle> {
        match self {
            Self::Local { file, .. } => Some(file),
            Self::Uploaded { .. } => None,
        }
    }

    /// The preview reference of a local entry.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewUri> {
        match self {
            Self::Local { preview, .. } => Some(preview),
            Self::Uploaded { .. } => None,
        }
    }

    /// The remote URI of an uploaded entry.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Local { .. } => None,
            Self::Uploaded { uri, .. } => Some(uri),
        }
    }

    /// Whether the entry was seeded from an earlier upload.
    #[must_use]
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

/// A file that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    /// Entry identifier.
    pub id: EntryId,
    /// The rejected file.
    pub file: FileHandle,
    /// Violations in check order; never empty.
    pub errors: Vec<ErrorReason>,
}

/// URI of an uploaded entry that was deleted in this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedUri {
    /// Remote URI of the file.
    pub uri: String,
}

/// Partitions produced by a single attach event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttachOutcome {
    /// Files that passed validation, in input order.
    pub accepted: Vec<AcceptedEntry>,
    /// Files that failed validation, in input order.
    pub rejected: Vec<RejectedEntry>,
}

impl AttachOutcome {
    /// Whether the event produced no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}
