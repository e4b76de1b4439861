//! CLI command handlers, one file per command.

mod analyze;
mod completions;
mod config;
mod render;

pub use analyze::{run_analyze, AnalyzeOptions};
pub use completions::run_completions;
pub use config::run_config;
pub use render::run_render;
