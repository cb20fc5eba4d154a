//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{join_text, Cli, Commands};
pub use output::{format_entries, format_mood_summary};
