// image_convert - batch in-place image transformer

pub mod config;
pub mod cli;
pub mod directive;
pub mod pipeline;
pub mod file;
pub mod util;

pub use cli::constants::{PROGRAM_NAME, PROGRAM_VERSION};
pub use directive::{parse_directive, DirectiveError, Operation, QuitScope, Rgb};
pub use pipeline::{execute, ExecError, InvertPolicy, Outcome, PipelineState};
