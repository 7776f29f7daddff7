//! CLI command handlers, one per file.

mod capsule;
mod completions;
mod host;
mod normalize;

pub use capsule::run_capsule;
pub use completions::{run_completions, run_man};
pub use host::run_host;
pub use normalize::run_normalize;
