//! Common utilities shared across the arbridge codebase.
//!
//! This crate provides environment-variable helpers and small file I/O
//! helpers used by the storage and networks crates.

/// General utility functions for common tasks.
pub mod utils;
