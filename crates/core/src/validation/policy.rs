//! Attachment policy.

use dropkit_shared::UploaderConfig;

use super::accept::AcceptPattern;

/// Validation and selection policy, fixed for a controller's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// Allow more than one file per attach and accumulate across attaches.
    pub multiple: bool,
    /// Accepted file types; `None` accepts everything.
    pub accept: Option<AcceptPattern>,
    /// Maximum file size in bytes; `None` means unlimited.
    pub max_size_bytes: Option<u64>,
}

impl Policy {
    /// Create an unrestricted single-file policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow multiple files.
    #[must_use]
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Restrict accepted file types.
    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<AcceptPattern>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_size_bytes(mut self, size: u64) -> Self {
        self.max_size_bytes = Some(size);
        self
    }
}

impl From<&UploaderConfig> for Policy {
    fn from(config: &UploaderConfig) -> Self {
        Self {
            multiple: config.multiple,
            accept: config.accept.as_deref().map(AcceptPattern::parse),
            max_size_bytes: config.max_size_bytes,
        }
    }
}
