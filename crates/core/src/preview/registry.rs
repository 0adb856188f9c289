//! Preview registry implementation.

use std::collections::HashSet;

use dropkit_shared::types::PreviewId;
use serde::Serialize;
use tracing::debug;

use crate::attachment::FileHandle;

/// URI of a minted preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PreviewUri(String);

impl PreviewUri {
    /// Wrap a URI string.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PreviewUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of preview references.
///
/// Implemented by the hosting environment; [`ObjectUrlRegistry`] is the
/// in-memory default.
pub trait PreviewRegistry {
    /// Mint a preview for a file that was just accepted.
    fn mint(&mut self, file: &FileHandle) -> PreviewUri;

    /// Release a preview. Returns `false` if it was not live.
    fn revoke(&mut self, preview: &PreviewUri) -> bool;
}

/// In-memory registry minting `blob:` style URIs and tracking which are live.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    live: HashSet<PreviewUri>,
}

impl ObjectUrlRegistry {
    /// URI scheme and authority of minted previews.
    pub const PREFIX: &'static str = "blob:dropkit/";

    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a preview is still live.
    #[must_use]
    pub fn is_live(&self, preview: &PreviewUri) -> bool {
        self.live.contains(preview)
    }

    /// Number of live previews.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl PreviewRegistry for ObjectUrlRegistry {
    fn mint(&mut self, file: &FileHandle) -> PreviewUri {
        let preview = PreviewUri::new(format!("{}{}", Self::PREFIX, PreviewId::new()));
        debug!(file = %file.name, preview = %preview, "Minted preview");
        self.live.insert(preview.clone());
        preview
    }

    fn revoke(&mut self, preview: &PreviewUri) -> bool {
        let removed = self.live.remove(preview);
        if removed {
            debug!(preview = %preview, "Revoked preview");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_creates_unique_live_previews() {
        let mut registry = ObjectUrlRegistry::new();
        let file = FileHandle::new("cat.png", 10);

        let first = registry.mint(&file);
        let second = registry.mint(&file);

        assert_ne!(first, second);
        assert!(first.as_str().starts_with(ObjectUrlRegistry::PREFIX));
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let mut registry = ObjectUrlRegistry::new();
        let preview = registry.mint(&FileHandle::new("cat.png", 10));

        assert!(registry.revoke(&preview));
        assert!(!registry.revoke(&preview));
        assert!(!registry.is_live(&preview));
        assert_eq!(registry.live_count(), 0);
    }
}
