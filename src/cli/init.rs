//! Start-up settings read from `argv[0]` and the environment.
//!
//! [`CliInit::from_env`] gathers everything the interpreter needs before the
//! first token is looked at. Each environment variable has a `*_from` core
//! that takes the raw value, so the conversion rules are testable without
//! touching the process environment.

use crate::cli::arg_utils::last_name_from_path;
use crate::cli::constants::{display_level, DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};
use crate::config::{ENV_DISPLAY_LEVEL, ENV_INVERT_POLICY, ENV_VIEWER};
use crate::pipeline::InvertPolicy;

/// Settings fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// Basename of `argv[0]`, used in help text.
    pub exe_name: String,
    /// Display level to install before processing.
    pub display_level: u32,
    /// What `i` does to RGBA images.
    pub invert_policy: InvertPolicy,
    /// Viewer command for `v`; `None` means prompt on the terminal.
    pub viewer: Option<String>,
}

impl CliInit {
    /// Build the settings from `argv0` and the process environment.
    ///
    /// The display level is resolved first so it governs the warnings about
    /// the other variables.
    pub fn from_env(argv0: &str) -> CliInit {
        let display_level = init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref());
        CliInit {
            exe_name: last_name_from_path(argv0).to_owned(),
            display_level,
            invert_policy: init_invert_policy_from(
                std::env::var(ENV_INVERT_POLICY).ok().as_deref(),
                display_level,
            ),
            viewer: init_viewer_from(std::env::var(ENV_VIEWER).ok().as_deref()),
        }
    }
}

/// Parse an optional display-level value; out-of-range values are clamped.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        match env.trim().parse::<u32>() {
            Ok(level) => return level.min(DISPLAY_LEVEL_MAX),
            Err(_) => {
                if display_level() >= 2 {
                    eprintln!(
                        "Ignore environment variable setting {}={}: not a valid unsigned value ",
                        ENV_DISPLAY_LEVEL, env
                    );
                }
            }
        }
    }
    DISPLAY_LEVEL_DEFAULT
}

/// Parse an optional invert-policy name; an unknown name is reported when
/// `display_level` is 2 or more.
pub fn init_invert_policy_from(env_val: Option<&str>, display_level: u32) -> InvertPolicy {
    if let Some(env) = env_val {
        match InvertPolicy::from_name(env) {
            Some(policy) => return policy,
            None => {
                if display_level >= 2 {
                    eprintln!(
                        "Ignore environment variable setting {}={}: expected 'preserve-alpha' or 'flatten' ",
                        ENV_INVERT_POLICY, env
                    );
                }
            }
        }
    }
    InvertPolicy::default()
}

/// An empty or blank viewer command counts as unset.
pub fn init_viewer_from(env_val: Option<&str>) -> Option<String> {
    env_val
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
