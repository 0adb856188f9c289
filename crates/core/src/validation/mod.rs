//! File validation.
//!
//! Pure checks of a file's metadata against a [`Policy`]:
//! - Size limit
//! - Accept pattern (MIME types, wildcards, extensions)
//!
//! Violations are returned as data, never as errors.

pub mod accept;
pub mod policy;
pub mod reason;
pub mod rules;

#[cfg(test)]
mod rules_props;

pub use accept::AcceptPattern;
pub use policy::Policy;
pub use reason::{ErrorReason, FILE_TYPE_ERROR, MAX_SIZE_ERROR};
pub use rules::{check_file_size, check_file_type, validate_file};
