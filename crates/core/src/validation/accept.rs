//! Accept pattern parsing and matching.
//!
//! The pattern uses the same syntax as the HTML `accept` attribute: a
//! comma-separated list where each item is a dot-prefixed extension
//! (`.pdf`), a MIME wildcard (`image/*`) or an exact MIME type
//! (`application/pdf`). Matching is case-insensitive.

use crate::attachment::FileHandle;

/// One item of an accept pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AcceptToken {
    /// `.ext`, stored lowercase with the leading dot.
    Extension(String),
    /// `type/*`, stored as the lowercase base type.
    Wildcard(String),
    /// `type/subtype`, stored lowercase.
    Exact(String),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }

        if token.starts_with('.') {
            Some(Self::Extension(token))
        } else if let Some(base) = token.strip_suffix("/*") {
            Some(Self::Wildcard(base_type(base).to_string()))
        } else {
            Some(Self::Exact(token))
        }
    }

    fn matches(&self, name: &str, mime_type: &str) -> bool {
        match self {
            Self::Extension(ext) => name.ends_with(ext.as_str()),
            Self::Wildcard(base) => base_type(mime_type) == base,
            Self::Exact(exact) => mime_type == exact,
        }
    }
}

/// Text before the first `/`, or the whole string when there is none.
fn base_type(mime_type: &str) -> &str {
    mime_type.split_once('/').map_or(mime_type, |(base, _)| base)
}

/// Parsed accept pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPattern {
    raw: String,
    tokens: Vec<AcceptToken>,
}

impl AcceptPattern {
    /// Parse a comma-separated accept pattern.
    ///
    /// Empty items are ignored; a pattern without items accepts every file.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = raw.split(',').filter_map(AcceptToken::parse).collect();
        Self { raw, tokens }
    }

    /// The pattern as supplied, suitable for an input's `accept` attribute.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern places no restriction on files.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check a file against the pattern.
    ///
    /// A file without a declared MIME type only matches extension items.
    #[must_use]
    pub fn matches(&self, file: &FileHandle) -> bool {
        if self.is_unrestricted() {
            return true;
        }

        let name = file.name.to_lowercase();
        let mime_type = file.mime_type.as_deref().unwrap_or_default().to_lowercase();

        self.tokens
            .iter()
            .any(|token| token.matches(&name, &mime_type))
    }
}

impl std::fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for AcceptPattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for AcceptPattern {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}
