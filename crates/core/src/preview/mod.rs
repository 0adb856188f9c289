//! Preview references for locally attached files.
//!
//! A preview is a short-lived URI that lets a rendering layer display a file
//! before it is uploaded anywhere. Every minted preview holds a resource in
//! the hosting environment, so the controller revokes it once the owning
//! entry goes away.

mod registry;

pub use registry::{ObjectUrlRegistry, PreviewRegistry, PreviewUri};
