//! Mock implementations for testing

mod remover;

pub use remover::MockRemover;
