//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bounded cursor pagination over remote list operations
#[derive(Parser, Debug)]
#[command(name = "cursor-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in endpoint profiles
    Profiles,

    /// Print an endpoint profile as YAML
    Show {
        /// Built-in profile name or path to a profile YAML file
        profile: String,
    },

    /// Validate a run configuration
    Validate {
        /// Run configuration file (YAML)
        #[arg(short = 'C', long)]
        config: PathBuf,
    },

    /// Page through an endpoint and print items as JSON lines
    Fetch {
        /// Run configuration file (YAML)
        #[arg(short = 'C', long)]
        config: PathBuf,

        /// Maximum number of items to return
        #[arg(long)]
        max_items: Option<u64>,

        /// Cursor to resume from
        #[arg(long)]
        start_cursor: Option<String>,

        /// Fetch a single page and print its continuation cursor
        #[arg(long)]
        manual: bool,

        /// Keep items already received when a bounded run fails mid-way
        #[arg(long)]
        stop_early: bool,

        /// Override the configured base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Extra filter value (KEY=VALUE, repeatable)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
