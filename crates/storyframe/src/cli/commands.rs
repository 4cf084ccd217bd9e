//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// storyframe - Turn screenplays and prose into storyboard frames
#[derive(Parser, Debug)]
#[command(name = "storyframe")]
#[command(about = "Turn screenplays and prose into storyboard frames", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract storyboard frames from a script
    Extract {
        /// Path to the script
        file: PathBuf,

        /// Frames per set (defaults to the configured value)
        #[arg(long)]
        frames: Option<usize>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show how a script would be segmented, without calling the model
    Plan {
        /// Path to the script
        file: PathBuf,

        /// Frames per set (defaults to the configured value)
        #[arg(long)]
        frames: Option<usize>,
    },

    /// Parse a frame list or marked script without calling the model
    Parse {
        /// Path to the text to parse
        file: PathBuf,

        /// Maximum number of frames to keep
        #[arg(long, default_value = "100")]
        max: usize,

        /// Lay the descriptions out as pages of this many frames (0 for one page)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Rebuild the frame list for an edited script
    Revise {
        /// Path to the script
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
