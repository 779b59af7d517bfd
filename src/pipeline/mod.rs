//! Per-image execution of an operation list.
//!
//! | Submodule    | Responsibility |
//! |--------------|---------------|
//! | [`state`]    | `PipelineState` - threshold level and background colour carried across files. |
//! | [`ops`]      | Pixel-level helpers: invert (two alpha policies), threshold, resize, flatten. |
//! | [`view`]     | `Previewer` - the `v` step, interactive or headless. |
//! | [`executor`] | `execute` - open, apply, then back up and save (or stop early). |

pub mod state;
pub mod ops;
pub mod view;
pub mod executor;

pub use executor::{execute, ExecError, Outcome, SkipReason};
pub use ops::InvertPolicy;
pub use state::PipelineState;
pub use view::{HeadlessPreview, InteractivePreview, Previewer};
