//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quicklist")]
#[command(about = "Quick list and mood journal kept in local storage", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default list (quick, mood)
        #[arg(short, long, default_value = "quick")]
        list: String,
    },

    /// Append an entry
    Add {
        /// Entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// List to add to (default: configured default_list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Flip the completion state of a quick-list entry
    Toggle {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark a quick-list entry as completed
    Done {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark a quick-list entry as not completed
    Undone {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove every entry with the given text
    Remove {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(short, long)]
        list: Option<String>,
    },

    /// Show the entries of a list
    Show {
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Log a mood in the mood journal
    Mood {
        /// happy, sad, angry, calm, excited, tired
        mood: String,

        /// Timestamp as "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Delete all entries of a list
    Clear {
        #[arg(short, long)]
        list: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(long)]
        list_all: bool,
    },
}

/// Rejoin words split by the shell into one entry text, trimmed the same way
/// entries are when stored
pub fn join_text(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}
