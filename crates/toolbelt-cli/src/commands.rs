// Rust guideline compliant 2026-10-16

//! Command implementations for the toolbelt CLI.

pub mod cat;
pub mod convert;
pub mod demo;
pub mod hex;
pub mod log;
