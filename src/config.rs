// config.rs - Compile-time configuration constants.
//
// Run-time settings (display level, invert policy, viewer command) are read
// from the environment by `cli::init`; the names of those variables live here
// so the help text and the init code agree on them.

// Marker that distinguishes a directive token from a filename token.
pub const DIRECTIVE_MARKER: char = '-';

// Separator between operations inside one directive string.
pub const DIRECTIVE_SEPARATOR: char = ',';

// Suffix appended to the original filename when it is moved aside.
// A second run on the same file replaces the previous backup.
pub const BACKUP_SUFFIX: &str = ".bak";

// Initial pipeline state, used until a `t` or `b` directive overrides it.
pub const THRESHOLD_DEFAULT: u8 = 0;
pub const BACKGROUND_DEFAULT: [u8; 3] = [255, 255, 255];

// Resize arguments are percentages: `r50` halves both dimensions.
pub const RESIZE_PERCENT_BASE: f64 = 100.0;

// Smallest dimension a resize may produce.
pub const MIN_DIMENSION: u32 = 1;

// Memory a single resize may claim: the output buffer plus the float buffer
// the resampler works through. Larger targets skip the file.
pub const RESIZE_ALLOC_LIMIT: u64 = 2 * 1024 * 1024 * 1024;

// Environment variables consulted at start-up.
pub const ENV_DISPLAY_LEVEL: &str = "IMAGE_CONVERT_DISPLAY_LEVEL";
pub const ENV_INVERT_POLICY: &str = "IMAGE_CONVERT_INVERT_POLICY";
pub const ENV_VIEWER: &str = "IMAGE_CONVERT_VIEWER";

// Process exit codes. 1..=7 belong to the directive parser; 8 is raised when a
// backup or save fails part-way through a file.
pub const EXIT_OK: i32 = 0;
pub const EXIT_INVERT_ARGUMENT: i32 = 1;
pub const EXIT_THRESHOLD_RANGE: i32 = 2;
pub const EXIT_THRESHOLD_NOT_INTEGER: i32 = 3;
pub const EXIT_UNKNOWN_COMMAND: i32 = 4;
pub const EXIT_QUIT_ARGUMENT: i32 = 5;
pub const EXIT_RESIZE_RATIO: i32 = 6;
pub const EXIT_RESIZE_NOT_INTEGER: i32 = 7;
pub const EXIT_WRITE_FAILURE: i32 = 8;
