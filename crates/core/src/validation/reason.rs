//! Validation outcome codes.

use serde::{Deserialize, Serialize};

/// Error code for a file larger than the configured maximum.
pub const MAX_SIZE_ERROR: &str = "MAX_SIZE_ERROR";

/// Error code for a file whose type does not satisfy the accept pattern.
pub const FILE_TYPE_ERROR: &str = "FILE_TYPE_ERROR";

/// Reason a file was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorReason {
    /// File size exceeds the maximum.
    #[serde(rename = "MAX_SIZE_ERROR")]
    MaxSize,
    /// File type is not accepted.
    #[serde(rename = "FILE_TYPE_ERROR")]
    FileType,
}

impl ErrorReason {
    /// Stable string code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxSize => MAX_SIZE_ERROR,
            Self::FileType => FILE_TYPE_ERROR,
        }
    }

    /// Parse from the stable string code.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            MAX_SIZE_ERROR => Some(Self::MaxSize),
            FILE_TYPE_ERROR => Some(Self::FileType),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
