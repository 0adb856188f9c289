//! Attachment controller implementation.

use dropkit_shared::UploaderConfig;
use dropkit_shared::types::EntryId;
use tracing::{debug, info, warn};

use super::error::ControllerError;
use super::types::{AcceptedEntry, AttachOutcome, RejectedEntry, RemovedUri};
use crate::event::{AttachEvent, files_from_event};
use crate::preview::{ObjectUrlRegistry, PreviewRegistry};
use crate::validation::{Policy, validate_file};

/// Listener notified after every attach event.
///
/// Receives the newly accepted and rejected entries of that event, and the
/// event itself.
pub type AttachListener = Box<dyn FnMut(&[AcceptedEntry], &[RejectedEntry], &AttachEvent)>;

/// Construction options for an [`AttachmentController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Validation and selection policy.
    pub policy: Policy,
    /// URIs of files uploaded in an earlier session.
    pub uploaded_uris: Vec<String>,
}

impl ControllerOptions {
    /// Create options with the given policy and no uploaded files.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            uploaded_uris: Vec::new(),
        }
    }

    /// Seed the controller with previously uploaded files.
    #[must_use]
    pub fn with_uploaded_uris<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uploaded_uris = uris.into_iter().map(Into::into).collect();
        self
    }
}

impl From<&UploaderConfig> for ControllerOptions {
    fn from(config: &UploaderConfig) -> Self {
        Self::new(Policy::from(config)).with_uploaded_uris(config.uploaded_uris.iter().cloned())
    }
}

/// Owns the accepted, rejected and removed file sets.
///
/// All state changes go through [`handle_attach`](Self::handle_attach),
/// [`delete_file`](Self::delete_file), [`delete_entry`](Self::delete_entry)
/// and [`delete_all_files`](Self::delete_all_files).
pub struct AttachmentController<R: PreviewRegistry = ObjectUrlRegistry> {
    policy: Policy,
    accepted: Vec<AcceptedEntry>,
    rejected: Vec<RejectedEntry>,
    removed: Vec<RemovedUri>,
    previews: R,
    listeners: Vec<AttachListener>,
}

impl AttachmentController<ObjectUrlRegistry> {
    /// Create a controller backed by the in-memory preview registry.
    #[must_use]
    pub fn new(options: ControllerOptions) -> Self {
        Self::with_registry(options, ObjectUrlRegistry::new())
    }
}

impl<R: PreviewRegistry> AttachmentController<R> {
    /// Create a controller minting previews through `previews`.
    ///
    /// Uploaded URIs seed the accepted sequence; only the first one is kept
    /// when the policy does not allow multiple files.
    #[must_use]
    pub fn with_registry(options: ControllerOptions, previews: R) -> Self {
        let ControllerOptions {
            policy,
            uploaded_uris,
        } = options;

        let keep = if policy.multiple { usize::MAX } else { 1 };
        let accepted: Vec<_> = uploaded_uris
            .into_iter()
            .take(keep)
            .map(AcceptedEntry::uploaded)
            .collect();

        debug!(
            multiple = policy.multiple,
            uploaded = accepted.len(),
            "Attachment controller created"
        );

        Self {
            policy,
            accepted,
            rejected: Vec::new(),
            removed: Vec::new(),
            previews,
            listeners: Vec::new(),
        }
    }

    /// The policy this controller enforces.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Accepted entries, in attach order.
    #[must_use]
    pub fn accepted_files(&self) -> &[AcceptedEntry] {
        &self.accepted
    }

    /// Rejected entries, in attach order.
    #[must_use]
    pub fn rejected_files(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    /// URIs of uploaded entries deleted so far, in deletion order.
    #[must_use]
    pub fn removed_uris(&self) -> &[RemovedUri] {
        &self.removed
    }

    /// The preview registry.
    #[must_use]
    pub fn previews(&self) -> &R {
        &self.previews
    }

    /// Register a listener notified after every attach event.
    pub fn on_attach<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(&[AcceptedEntry], &[RejectedEntry], &AttachEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Attach the files carried by an input change or drop event.
    ///
    /// The event is consumed (default handling suppressed, propagation
    /// stopped). When the policy does not allow multiple files only the first
    /// candidate is considered; the rest are dropped without being rejected.
    ///
    /// Each partition of the outcome is merged on its own and only when it is
    /// non-empty: appended with `multiple`, replacing the previous entries
    /// otherwise. Listeners are notified even when nothing was attached.
    pub fn handle_attach(&mut self, event: &mut AttachEvent) -> AttachOutcome {
        let mut files = files_from_event(event);
        if !self.policy.multiple {
            files.truncate(1);
        }

        let mut outcome = AttachOutcome::default();
        for file in files {
            let errors = validate_file(&file, &self.policy);
            if errors.is_empty() {
                let preview = self.previews.mint(&file);
                outcome.accepted.push(AcceptedEntry::Local {
                    id: EntryId::new(),
                    file,
                    preview,
                });
            } else {
                debug!(file = %file.name, ?errors, "File rejected");
                outcome.rejected.push(RejectedEntry {
                    id: EntryId::new(),
                    file,
                    errors,
                });
            }
        }

        self.merge_accepted(&outcome.accepted);
        self.merge_rejected(&outcome.rejected);

        info!(
            drop = event.is_drop(),
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            "Files attached"
        );

        for listener in &mut self.listeners {
            listener(&outcome.accepted, &outcome.rejected, &*event);
        }

        outcome
    }

    /// Delete the accepted entry at `index`.
    ///
    /// An uploaded entry is recorded in [`removed_uris`](Self::removed_uris);
    /// a local entry has its preview released.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::IndexOutOfRange`] and leaves the state
    /// untouched if `index` does not address an accepted entry.
    pub fn delete_file(&mut self, index: usize) -> Result<AcceptedEntry, ControllerError> {
        if index >= self.accepted.len() {
            warn!(index, len = self.accepted.len(), "Delete index out of range");
            return Err(ControllerError::index_out_of_range(
                index,
                self.accepted.len(),
            ));
        }

        let entry = self.accepted.remove(index);
        self.retire(&entry);
        Ok(entry)
    }

    /// Delete the accepted entry with the given identifier.
    ///
    /// Same bookkeeping as [`delete_file`](Self::delete_file), but immune to
    /// positions shifting between renders.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::EntryNotFound`] if no accepted entry has
    /// this identifier.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<AcceptedEntry, ControllerError> {
        let index = self
            .accepted
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| {
                warn!(%id, "Delete target not found");
                ControllerError::entry_not_found(id)
            })?;

        let entry = self.accepted.remove(index);
        self.retire(&entry);
        Ok(entry)
    }

    /// Clear accepted and rejected entries.
    ///
    /// Uploaded entries are recorded in [`removed_uris`](Self::removed_uris)
    /// in their accepted order.
    pub fn delete_all_files(&mut self) {
        let accepted = std::mem::take(&mut self.accepted);
        self.rejected.clear();

        for entry in &accepted {
            self.retire(entry);
        }

        info!(
            deleted = accepted.len(),
            removed_total = self.removed.len(),
            "All files deleted"
        );
    }

    fn merge_accepted(&mut self, incoming: &[AcceptedEntry]) {
        if incoming.is_empty() {
            return;
        }

        if !self.policy.multiple {
            let replaced = std::mem::take(&mut self.accepted);
            for entry in &replaced {
                self.release_preview(entry);
            }
        }
        self.accepted.extend_from_slice(incoming);
    }

    fn merge_rejected(&mut self, incoming: &[RejectedEntry]) {
        if incoming.is_empty() {
            return;
        }

        if !self.policy.multiple {
            self.rejected.clear();
        }
        self.rejected.extend_from_slice(incoming);
    }

    /// Bookkeeping for an entry removed by a delete command.
    fn retire(&mut self, entry: &AcceptedEntry) {
        match entry {
            AcceptedEntry::Uploaded { uri, .. } => {
                debug!(%uri, "Uploaded file removed");
                self.removed.push(RemovedUri { uri: uri.clone() });
            }
            AcceptedEntry::Local { .. } => self.release_preview(entry),
        }
    }

    fn release_preview(&mut self, entry: &AcceptedEntry) {
        if let Some(preview) = entry.preview() {
            self.previews.revoke(preview);
        }
    }
}

impl<R: PreviewRegistry> Drop for AttachmentController<R> {
    fn drop(&mut self) {
        for entry in &self.accepted {
            if let Some(preview) = entry.preview() {
                self.previews.revoke(preview);
            }
        }
    }
}

impl<R: PreviewRegistry> std::fmt::Debug for AttachmentController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachmentController")
            .field("policy", &self.policy)
            .field("accepted", &self.accepted)
            .field("rejected", &self.rejected)
            .field("removed", &self.removed)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
