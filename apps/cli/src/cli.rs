use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Label short posts as positive or negative.
#[derive(Debug, Parser)]
#[command(name = "shub", version, about, propagate_version = true)]
pub(crate) struct Cli {
    /// Configuration file (defaults to an optional `server.*` in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Classify a single text
    Text {
        /// Text to classify
        text: String,
    },
    /// Classify the built-in demo posts
    Demo {
        /// Number of demo posts (5-20)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Fetch and classify a user's recent posts
    User {
        /// Handle, with or without a leading `@`
        username: String,
        /// Number of posts to fetch (10-100)
        #[arg(long)]
        count: Option<usize>,
        /// Answer with the demo batch when fetching fails
        #[arg(long)]
        fallback: bool,
    },
}
