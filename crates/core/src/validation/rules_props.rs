//! Property-based tests for file validation rules.

use proptest::prelude::*;

use super::policy::Policy;
use super::reason::ErrorReason;
use super::rules::validate_file;
use crate::attachment::FileHandle;

/// Strategy to generate a plain file name with the given extension.
fn file_name(ext: &'static str) -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,16}".prop_map(move |stem| format!("{stem}.{ext}"))
}

/// Strategy to generate a MIME type outside the `image` family.
fn non_image_mime() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("application/pdf"),
        Just("text/plain"),
        Just("audio/mpeg"),
        Just("video/mp4"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Oversized files always carry MAX_SIZE_ERROR first.
    #[test]
    fn prop_oversized_file_rejected(
        max in 0u64..1_000_000,
        excess in 1u64..1_000_000,
        name in file_name("bin"),
    ) {
        let policy = Policy::new().with_max_size_bytes(max);
        let file = FileHandle::new(name, max + excess);

        let errors = validate_file(&file, &policy);
        prop_assert_eq!(errors.first(), Some(&ErrorReason::MaxSize));
    }

    /// Files within the limit never carry MAX_SIZE_ERROR.
    #[test]
    fn prop_file_within_limit_not_size_rejected(
        max in 0u64..1_000_000,
        size_ratio in 0u64..=100,
        name in file_name("bin"),
    ) {
        let policy = Policy::new().with_max_size_bytes(max);
        let file = FileHandle::new(name, max * size_ratio / 100);

        prop_assert!(!validate_file(&file, &policy).contains(&ErrorReason::MaxSize));
    }

    /// Files outside an image wildcard always carry FILE_TYPE_ERROR.
    #[test]
    fn prop_non_matching_type_rejected(
        mime_type in non_image_mime(),
        name in file_name("dat"),
        size in 0u64..10_000,
    ) {
        let policy = Policy::new().with_accept("image/*");
        let file = FileHandle::new(name, size).with_mime_type(mime_type);

        prop_assert_eq!(validate_file(&file, &policy), vec![ErrorReason::FileType]);
    }

    /// Extension items match regardless of the declared MIME type.
    #[test]
    fn prop_extension_match_ignores_mime(
        mime_type in non_image_mime(),
        name in file_name("pdf"),
    ) {
        let policy = Policy::new().with_accept(".pdf");
        let file = FileHandle::new(name, 1).with_mime_type(mime_type);

        prop_assert!(validate_file(&file, &policy).is_empty());
    }
}
