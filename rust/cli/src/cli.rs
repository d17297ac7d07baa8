//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Compare two five-card poker hands under Texas Hold'em rankings"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two hands, e.g. `showdown compare "2H 4D 6S 8C AD" "KH KD 3C 4S 9H"`
    Compare {
        /// First hand: five space-separated cards
        hand1: String,
        /// Second hand: five space-separated cards
        hand2: String,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Shorthand for `--format json`
        #[arg(long, conflicts_with = "format")]
        json: bool,
        /// Reject hands that share a card
        #[arg(long)]
        strict: bool,
    },
    /// Show the category of a single hand
    Eval {
        /// Five space-separated cards
        hand: String,
    },
    /// Prompt for pairs of hands until the user stops
    Play {
        /// Reject hands that share a card
        #[arg(long)]
        strict: bool,
    },
    /// Deal two hands from a shuffled deck and compare them
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display resolved configuration and where each value came from
    Cfg,
}

/// How `compare` renders its result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
