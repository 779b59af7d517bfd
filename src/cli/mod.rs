//! Command-line interface for the `image_convert` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the `DISPLAY_LEVEL` global and the `displaylevel!` / `displayout!` macros. |
//! | [`help`]      | Usage and help text, and the wait-for-Enter prompt. |
//! | [`arg_utils`] | String helpers: path basename, glob metacharacter test. |
//! | [`init`]      | `CliInit` - settings taken from `argv[0]` and the environment. |
//! | [`args`]      | `Token` - classification of each argument as directive or filename. |
//! | [`dispatch`]  | `Interpreter` - the token loop that parses directives and runs files. |
//!
//! Typical call sequence: `CliInit::from_env` → `dispatch::run` → exit code.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod init;
pub mod args;
pub mod dispatch;
