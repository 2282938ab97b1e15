//! In-place file patching primitives

pub mod engine;
pub mod error;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use engine::{apply_substring_rules, filter_and_rewrite_lines, overwrite_with_fixed_content};
#[allow(unused_imports)]
pub use error::FileAccessError;
