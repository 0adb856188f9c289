//! MIME type lookup by file extension.

use std::path::Path;

/// Extensions the driver recognises, matched case-insensitively.
const MIME_TYPES: &[(&str, &str)] = &[
    // Documents
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    // Media
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
];

/// Guess a MIME type from a path's extension.
///
/// Returns `None` for unknown extensions, the same way a browser reports an
/// empty type.
pub fn guess(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime_type)| *mime_type)
}
