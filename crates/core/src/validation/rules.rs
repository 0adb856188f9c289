//! File validation rules.

use super::accept::AcceptPattern;
use super::policy::Policy;
use super::reason::ErrorReason;
use crate::attachment::FileHandle;

/// Check a file against the size limit.
#[must_use]
pub fn check_file_size(file: &FileHandle, max_size_bytes: Option<u64>) -> Option<ErrorReason> {
    match max_size_bytes {
        Some(max) if file.size_bytes > max => Some(ErrorReason::MaxSize),
        _ => None,
    }
}

/// Check a file against the accept pattern.
#[must_use]
pub fn check_file_type(file: &FileHandle, accept: Option<&AcceptPattern>) -> Option<ErrorReason> {
    match accept {
        Some(accept) if !accept.matches(file) => Some(ErrorReason::FileType),
        _ => None,
    }
}

/// Validates a file against a policy.
///
/// Returns every violation in check order (size, then type). An empty result
/// means the file is accepted.
#[must_use]
pub fn validate_file(file: &FileHandle, policy: &Policy) -> Vec<ErrorReason> {
    [
        check_file_size(file, policy.max_size_bytes),
        check_file_type(file, policy.accept.as_ref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_policy_accepts_everything() {
        let file = FileHandle::new("huge.iso", u64::MAX);
        assert!(validate_file(&file, &Policy::new()).is_empty());
    }

    #[test]
    fn test_size_at_limit_is_accepted() {
        let policy = Policy::new().with_max_size_bytes(1000);
        assert!(validate_file(&FileHandle::new("a.pdf", 1000), &policy).is_empty());
    }

    #[test]
    fn test_oversized_file() {
        let policy = Policy::new().with_max_size_bytes(1000);
        assert_eq!(
            validate_file(&FileHandle::new("super.pdf", 1200), &policy),
            vec![ErrorReason::MaxSize]
        );
    }

    #[test]
    fn test_wrong_type() {
        let policy = Policy::new().with_accept("image/*");
        let file = FileHandle::new("doc.pdf", 10).with_mime_type("application/pdf");
        assert_eq!(validate_file(&file, &policy), vec![ErrorReason::FileType]);
    }

    #[test]
    fn test_both_errors_in_fixed_order() {
        let policy = Policy::new().with_accept("image/*").with_max_size_bytes(5);
        let file = FileHandle::new("doc.pdf", 10).with_mime_type("application/pdf");
        assert_eq!(
            validate_file(&file, &policy),
            vec![ErrorReason::MaxSize, ErrorReason::FileType]
        );
    }

    #[test]
    fn test_zero_limit_rejects_non_empty_files() {
        let policy = Policy::new().with_max_size_bytes(0);
        assert!(validate_file(&FileHandle::new("empty.txt", 0), &policy).is_empty());
        assert_eq!(
            validate_file(&FileHandle::new("one.txt", 1), &policy),
            vec![ErrorReason::MaxSize]
        );
    }
}
