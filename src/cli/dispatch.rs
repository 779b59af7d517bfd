//! The argument interpreter.
//!
//! A flat loop over the classified tokens with one piece of memory: the
//! operation list from the most recent directive. Directive tokens replace
//! that list (a bad directive ends the run with its exit code); filename
//! tokens are expanded and every match is run through the executor with the
//! current list and the run-wide [`PipelineState`].
//!
//! Per-file read problems (missing file, undecodable data, unsupported colour
//! mode) are reported and the batch moves on. A failed rename or write stops
//! the run with [`EXIT_WRITE_FAILURE`].

use crate::cli::arg_utils::has_glob_meta;
use crate::cli::args::{classify_all, Token};
use crate::cli::help::print_help;
use crate::cli::init::CliInit;
use crate::config::{EXIT_OK, EXIT_WRITE_FAILURE};
use crate::directive::{parse_directive_with, Operation};
use crate::pipeline::view::previewer_for;
use crate::pipeline::{execute, InvertPolicy, Outcome, PipelineState, Previewer, SkipReason};
use crate::util::expand_pattern;
use crate::{displaylevel, displayout};

/// Whether the loop keeps going after a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Stop now and exit with this code.
    Exit(i32),
}

/// Operation list currently in force, with the directive text it came from.
#[derive(Debug, Clone)]
struct Current {
    directive: String,
    ops: Vec<Operation>,
}

pub struct Interpreter {
    exe_name: String,
    policy: InvertPolicy,
    previewer: Box<dyn Previewer>,
    state: PipelineState,
    current: Option<Current>,
}

impl Interpreter {
    pub fn new(exe_name: &str, policy: InvertPolicy, previewer: Box<dyn Previewer>) -> Self {
        Interpreter {
            exe_name: exe_name.to_owned(),
            policy,
            previewer,
            state: PipelineState::default(),
            current: None,
        }
    }

    /// Pipeline state as left by the tokens processed so far.
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Operations that the next filename token would run.
    pub fn current_ops(&self) -> Option<&[Operation]> {
        self.current.as_ref().map(|c| c.ops.as_slice())
    }

    /// Process every argument in order and return the exit code.
    pub fn run(&mut self, argv: &[String]) -> i32 {
        for token in classify_all(argv) {
            if let Flow::Exit(code) = self.step(token) {
                return code;
            }
        }
        EXIT_OK
    }

    /// Process one token.
    pub fn step(&mut self, token: Token<'_>) -> Flow {
        match token {
            Token::Directive(directive) => self.load_directive(directive),
            Token::Files(pattern) => self.process_pattern(pattern),
        }
    }

    fn load_directive(&mut self, directive: &str) -> Flow {
        let exe_name = &self.exe_name;
        match parse_directive_with(directive, &mut || print_help(exe_name)) {
            Ok(ops) => {
                displaylevel!(4, "directive '{}' -> {:?} \n", directive, ops);
                self.current = Some(Current {
                    directive: directive.to_lowercase(),
                    ops,
                });
                Flow::Continue
            }
            Err(e) => {
                displaylevel!(1, "Error: {} \n", e);
                Flow::Exit(e.exit_code())
            }
        }
    }

    fn process_pattern(&mut self, pattern: &str) -> Flow {
        let current = match &self.current {
            Some(c) => c.clone(),
            None => {
                displaylevel!(2, "{}: no commands given yet -- ignored \n", pattern);
                return Flow::Continue;
            }
        };

        let files = match expand_pattern(pattern) {
            Ok(files) => files,
            Err(e) => {
                displaylevel!(1, "{}: bad wildcard pattern: {} -- ignored \n", pattern, e);
                return Flow::Continue;
            }
        };
        if files.is_empty() {
            if has_glob_meta(pattern) {
                displaylevel!(3, "{}: no matching files \n", pattern);
            } else {
                displaylevel!(1, "{}: No such file -- skipped \n", pattern);
            }
            return Flow::Continue;
        }

        for path in files {
            let outcome = execute(
                &path,
                &current.ops,
                &mut self.state,
                self.previewer.as_mut(),
                self.policy,
            );
            match outcome {
                Ok(Outcome::Saved { .. }) => {
                    displayout!(
                        "File '{}' has been converted with command '{}'\n",
                        path.display(),
                        current.directive
                    );
                }
                Ok(Outcome::Skipped(SkipReason::UnsupportedMode(mode))) => {
                    displaylevel!(
                        1,
                        "{}: unsupported image mode {} (need RGB or RGBA) -- skipped \n",
                        path.display(),
                        mode
                    );
                }
                Ok(Outcome::QuitFile) => {
                    displaylevel!(3, "{}: stopped by 'q', left unchanged \n", path.display());
                }
                Ok(Outcome::QuitAll) => {
                    displaylevel!(3, "{}: stopped by 'qq', exiting \n", path.display());
                    return Flow::Exit(EXIT_OK);
                }
                Err(e) if e.is_fatal() => {
                    displaylevel!(1, "Error: {} \n", e);
                    return Flow::Exit(EXIT_WRITE_FAILURE);
                }
                Err(e) => {
                    displaylevel!(1, "{} -- skipped \n", e);
                }
            }
        }
        Flow::Continue
    }
}

/// Run the whole command line with the settings in `init`.
pub fn run(init: &CliInit, argv: &[String]) -> i32 {
    displaylevel!(4, "invert policy: {} \n", init.invert_policy.name());
    let previewer = previewer_for(init.viewer.clone());
    let mut interpreter = Interpreter::new(&init.exe_name, init.invert_policy, previewer);
    interpreter.run(argv)
}
