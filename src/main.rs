//! Binary entry point for the `image_convert` command-line tool.
//!
//! # Control flow
//!
//! 1. [`CliInit::from_env`] reads `argv[0]` and the environment.
//! 2. With no further arguments, print usage and exit 0.
//! 3. Otherwise [`run`] walks the arguments and returns the exit code.

use image_convert::cli::constants::{set_display_level, PROGRAM_NAME};
use image_convert::cli::dispatch::run;
use image_convert::cli::help::print_usage;
use image_convert::cli::init::CliInit;
use image_convert::config::EXIT_OK;

fn main() {
    let argv0 = std::env::args().next().unwrap_or_else(|| PROGRAM_NAME.to_owned());
    let init = CliInit::from_env(&argv0);
    set_display_level(init.display_level);

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() {
        print_usage(&init.exe_name);
        std::process::exit(EXIT_OK);
    }

    let exit_code = run(&init, &argv);
    std::process::exit(exit_code);
}
