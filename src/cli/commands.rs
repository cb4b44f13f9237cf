//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "remind")]
#[command(about = "Weekly pulse of your personal journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./remind.toml, then the user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the past week of entries
    Pulse {
        /// Journal root (overrides config)
        #[arg(long, value_name = "DIR")]
        journal_dir: Option<PathBuf>,

        /// Days to look back (overrides config)
        #[arg(short, long)]
        days: Option<u32>,

        /// Skip the text-analysis service and use the built-in lexicon
        #[arg(long)]
        offline: bool,

        /// Do not request a weekly insight
        #[arg(long)]
        no_insight: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned content of one entry
    Clean {
        /// Markdown file to clean
        file: PathBuf,
    },

    /// Write cleaned copies of every dated entry
    Ingest {
        /// Journal root (overrides config)
        #[arg(long, value_name = "DIR")]
        journal_dir: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "data/cleaned")]
        output: PathBuf,
    },

    /// List entries inside the analysis window
    Entries {
        /// Journal root (overrides config)
        #[arg(long, value_name = "DIR")]
        journal_dir: Option<PathBuf>,

        /// Days to look back (overrides config)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default remind.toml in the current directory
        #[arg(long)]
        init: bool,
    },
}
