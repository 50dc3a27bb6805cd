// Rust guideline compliant 2026-10-16

//! Toolbelt CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;

pub use context::Context;
