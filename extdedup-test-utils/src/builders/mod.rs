//! Test builders

mod tree;

pub use tree::{TreeBuilder, list_files};
