//! Property-based tests for attachment merge rules.

use proptest::prelude::*;

use super::{AttachmentController, ControllerOptions, FileHandle};
use crate::event::AttachEvent;
use crate::validation::Policy;

const MAX_SIZE: u64 = 1_000;

/// Strategy to generate a batch of files straddling the size limit.
fn batch() -> impl Strategy<Value = Vec<FileHandle>> {
    prop::collection::vec(
        ("[a-z]{1,8}", 0u64..2 * MAX_SIZE)
            .prop_map(|(stem, size)| FileHandle::new(format!("{stem}.bin"), size)),
        0..6,
    )
}

fn event(files: Vec<FileHandle>, drop: bool) -> AttachEvent {
    if drop {
        AttachEvent::drop(files)
    } else {
        AttachEvent::change(files)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With `multiple`, the accepted and rejected sequences are the
    /// concatenation of every batch's partitions, in order.
    #[test]
    fn prop_multiple_accumulates(batches in prop::collection::vec((batch(), any::<bool>()), 1..5)) {
        let policy = Policy::new().with_multiple(true).with_max_size_bytes(MAX_SIZE);
        let mut controller = AttachmentController::new(ControllerOptions::new(policy));

        let mut expected_accepted = Vec::new();
        let mut expected_rejected = Vec::new();
        for (files, drop) in batches {
            for file in &files {
                if file.size_bytes > MAX_SIZE {
                    expected_rejected.push(file.clone());
                } else {
                    expected_accepted.push(file.clone());
                }
            }
            controller.handle_attach(&mut event(files, drop));
        }

        let accepted: Vec<_> = controller
            .accepted_files()
            .iter()
            .filter_map(|entry| entry.file().cloned())
            .collect();
        let rejected: Vec<_> = controller
            .rejected_files()
            .iter()
            .map(|entry| entry.file.clone())
            .collect();
        prop_assert_eq!(accepted, expected_accepted);
        prop_assert_eq!(rejected, expected_rejected);
        prop_assert!(controller.rejected_files().iter().all(|entry| !entry.errors.is_empty()));
    }

    /// Without `multiple`, neither sequence ever holds more than one entry.
    #[test]
    fn prop_single_holds_at_most_one(batches in prop::collection::vec((batch(), any::<bool>()), 1..5)) {
        let policy = Policy::new().with_max_size_bytes(MAX_SIZE);
        let mut controller = AttachmentController::new(ControllerOptions::new(policy));

        for (files, drop) in batches {
            controller.handle_attach(&mut event(files, drop));
            prop_assert!(controller.accepted_files().len() <= 1);
            prop_assert!(controller.rejected_files().len() <= 1);
            prop_assert_eq!(
                controller.previews().live_count(),
                controller.accepted_files().len()
            );
        }
    }

    /// Deleting everything releases every preview and keeps no rejected entry.
    #[test]
    fn prop_delete_all_clears(batches in prop::collection::vec((batch(), any::<bool>()), 1..5)) {
        let policy = Policy::new().with_multiple(true).with_max_size_bytes(MAX_SIZE);
        let mut controller = AttachmentController::new(ControllerOptions::new(policy));
        for (files, drop) in batches {
            controller.handle_attach(&mut event(files, drop));
        }

        controller.delete_all_files();

        prop_assert!(controller.accepted_files().is_empty());
        prop_assert!(controller.rejected_files().is_empty());
        prop_assert_eq!(controller.previews().live_count(), 0);
        prop_assert!(controller.removed_uris().is_empty());
    }
}
