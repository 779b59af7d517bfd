//! Token classification for the argument loop.
//!
//! The command line is a flat sequence of directive tokens and filename
//! tokens; there are no options in the usual sense. A token that starts with
//! `-` replaces the current operation list, anything else names files to run
//! that list on. A bare `-` is an empty directive and clears the list.

use crate::config::DIRECTIVE_MARKER;

/// One command-line argument, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Directive text without its leading marker, e.g. `i,t32`.
    Directive(&'a str),
    /// A filename or glob pattern.
    Files(&'a str),
}

/// Classify a single argument.
pub fn classify(arg: &str) -> Token<'_> {
    match arg.strip_prefix(DIRECTIVE_MARKER) {
        Some(directive) => Token::Directive(directive),
        None => Token::Files(arg),
    }
}

/// Classify every argument, skipping empty ones.
pub fn classify_all(argv: &[String]) -> Vec<Token<'_>> {
    argv.iter()
        .filter(|a| !a.is_empty())
        .map(|a| classify(a))
        .collect()
}
