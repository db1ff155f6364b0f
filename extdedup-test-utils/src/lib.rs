//! Test utilities for extdedup
//!
//! This crate provides a temporary directory tree builder and a mock
//! remover for testing scanning and deletion.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{TreeBuilder, list_files};
pub use mocks::MockRemover;
