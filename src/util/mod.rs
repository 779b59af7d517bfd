//! Filesystem helpers used by the interpreter.
//!
//! - [`file_list`] - wildcard expansion of filename tokens

pub mod file_list;

pub use file_list::expand_pattern;
