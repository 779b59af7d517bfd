//! Directive strings and the operations they describe.
//!
//! | Submodule | Responsibility |
//! |-----------|---------------|
//! | [`types`] | `Operation`, `QuitScope` and `Rgb` - the typed pipeline steps. |
//! | [`error`] | `DirectiveError` - one variant per rejected-token class, each with its exit code. |
//! | [`parse`] | `parse_directive` - turns `i,t32,r50` into an ordered `Vec<Operation>`. |

pub mod types;
pub mod error;
pub mod parse;

pub use error::DirectiveError;
pub use parse::{parse_directive, parse_directive_with, parse_token};
pub use types::{Operation, QuitScope, Rgb};
