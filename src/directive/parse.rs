//! Directive-string parsing.
//!
//! A directive string is the text of a `-` token without its marker, e.g.
//! `i,t32,r50,v,qq`. It is lowercase-folded as a whole and split on `,`; each
//! piece is one operation code letter followed by an optional argument.
//!
//! Parsing stops at the first bad token. Help (`h` / `?`) is the one code with
//! an immediate side effect: the help sink runs as soon as the token is seen,
//! nothing is appended, and parsing carries on with the remaining tokens.

use std::num::IntErrorKind;

use crate::cli::constants::PROGRAM_NAME;
use crate::cli::help::print_help;
use crate::config::{DIRECTIVE_SEPARATOR, RESIZE_PERCENT_BASE};
use crate::directive::error::DirectiveError;
use crate::directive::types::{Operation, QuitScope, Rgb};

/// Parse `directive` into an operation list, printing help to stdout for any
/// `h` / `?` token.
pub fn parse_directive(directive: &str) -> Result<Vec<Operation>, DirectiveError> {
    parse_directive_with(directive, &mut || print_help(PROGRAM_NAME))
}

/// Parse `directive`, calling `on_help` once for every `h` / `?` token.
///
/// An empty directive string yields an empty list.
pub fn parse_directive_with(
    directive: &str,
    on_help: &mut dyn FnMut(),
) -> Result<Vec<Operation>, DirectiveError> {
    let folded = directive.to_lowercase();
    if folded.is_empty() {
        return Ok(Vec::new());
    }

    let mut ops = Vec::new();
    for token in folded.split(DIRECTIVE_SEPARATOR) {
        match parse_token(token)? {
            Operation::Help => on_help(),
            op => ops.push(op),
        }
    }
    Ok(ops)
}

/// Parse a single, already lowercase-folded token.
pub fn parse_token(token: &str) -> Result<Operation, DirectiveError> {
    let mut chars = token.chars();
    let code = match chars.next() {
        Some(c) => c,
        None => {
            return Err(DirectiveError::UnknownCommand {
                token: token.to_owned(),
            })
        }
    };
    let arg = chars.as_str();

    match code {
        'i' => no_argument(code, arg, Operation::Invert),
        'v' => no_argument(code, arg, Operation::View),
        't' => parse_threshold(code, arg),
        'r' => parse_resize(code, arg),
        'b' => parse_background(code, arg),
        'q' => match arg {
            "" => Ok(Operation::Quit(QuitScope::File)),
            "q" => Ok(Operation::Quit(QuitScope::All)),
            _ => Err(DirectiveError::BadQuitArgument {
                code,
                arg: arg.to_owned(),
            }),
        },
        'h' | '?' => Ok(Operation::Help),
        _ => Err(DirectiveError::UnknownCommand {
            token: token.to_owned(),
        }),
    }
}

fn no_argument(code: char, arg: &str, op: Operation) -> Result<Operation, DirectiveError> {
    if arg.is_empty() {
        Ok(op)
    } else {
        Err(DirectiveError::UnexpectedArgument { code })
    }
}

fn parse_threshold(code: char, arg: &str) -> Result<Operation, DirectiveError> {
    let value = match arg.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(DirectiveError::ThresholdOutOfRange {
                        value: arg.to_owned(),
                    })
                }
                _ => Err(DirectiveError::ThresholdNotInteger {
                    code,
                    arg: arg.to_owned(),
                }),
            }
        }
    };
    u8::try_from(value)
        .map(Operation::Threshold)
        .map_err(|_| DirectiveError::ThresholdOutOfRange {
            value: arg.to_owned(),
        })
}

fn parse_resize(code: char, arg: &str) -> Result<Operation, DirectiveError> {
    let percent = match arg.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::NegOverflow => Err(DirectiveError::ResizeNotPositive {
                    value: arg.to_owned(),
                }),
                _ => Err(DirectiveError::ResizeNotInteger {
                    code,
                    arg: arg.to_owned(),
                }),
            }
        }
    };
    let ratio = percent as f64 / RESIZE_PERCENT_BASE;
    if ratio > 0.0 {
        Ok(Operation::Resize(ratio))
    } else {
        Err(DirectiveError::ResizeNotPositive {
            value: arg.to_owned(),
        })
    }
}

fn parse_background(code: char, arg: &str) -> Result<Operation, DirectiveError> {
    let bad = || DirectiveError::BadBackground {
        code,
        arg: arg.to_owned(),
    };
    let bytes = arg.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(bad());
    }
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&arg[i * 2..i * 2 + 2], 16).map_err(|_| bad())?;
    }
    Ok(Operation::SetBackground(Rgb(rgb)))
}
