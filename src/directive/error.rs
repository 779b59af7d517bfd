//! Rejected directive tokens.
//!
//! Every variant is fatal to the whole invocation; [`DirectiveError::exit_code`]
//! gives the process exit status the interpreter terminates with.

use thiserror::Error;

use crate::config::{
    EXIT_INVERT_ARGUMENT, EXIT_QUIT_ARGUMENT, EXIT_RESIZE_NOT_INTEGER, EXIT_RESIZE_RATIO,
    EXIT_THRESHOLD_NOT_INTEGER, EXIT_THRESHOLD_RANGE, EXIT_UNKNOWN_COMMAND,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// `i` or `v` followed by something.
    #[error("command '{code}' does not take an argument.")]
    UnexpectedArgument { code: char },

    #[error("Threshold argument must be between 0 and 255 inclusive.")]
    ThresholdOutOfRange { value: String },

    #[error("command '{code}' only takes an integer argument.")]
    ThresholdNotInteger { code: char, arg: String },

    #[error("command '{code}' only takes 3 hexdigits as an argument.")]
    BadBackground { code: char, arg: String },

    #[error("command '{code}' only takes 'q' as an argument.")]
    BadQuitArgument { code: char, arg: String },

    #[error("Resize argument must be greater than 0.")]
    ResizeNotPositive { value: String },

    #[error("command '{code}' only takes an integer argument.")]
    ResizeNotInteger { code: char, arg: String },

    #[error("command '{token}' is not valid.")]
    UnknownCommand { token: String },
}

impl DirectiveError {
    /// Exit status for this class of violation.
    ///
    /// `v` with an argument shares the unknown-command status; `i` with an
    /// argument has a status of its own.
    pub fn exit_code(&self) -> i32 {
        match self {
            DirectiveError::UnexpectedArgument { code: 'i' } => EXIT_INVERT_ARGUMENT,
            DirectiveError::UnexpectedArgument { .. } => EXIT_UNKNOWN_COMMAND,
            DirectiveError::ThresholdOutOfRange { .. } => EXIT_THRESHOLD_RANGE,
            DirectiveError::ThresholdNotInteger { .. } => EXIT_THRESHOLD_NOT_INTEGER,
            DirectiveError::BadBackground { .. } => EXIT_UNKNOWN_COMMAND,
            DirectiveError::BadQuitArgument { .. } => EXIT_QUIT_ARGUMENT,
            DirectiveError::ResizeNotPositive { .. } => EXIT_RESIZE_RATIO,
            DirectiveError::ResizeNotInteger { .. } => EXIT_RESIZE_NOT_INTEGER,
            DirectiveError::UnknownCommand { .. } => EXIT_UNKNOWN_COMMAND,
        }
    }
}
