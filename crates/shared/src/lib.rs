//! Shared identifiers and configuration for Dropkit.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for attachment entries and preview references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, LoggingConfig, UploaderConfig};
