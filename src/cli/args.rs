//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Network clock, click scheduler and Chinese formatting helpers
#[derive(Parser)]
#[command(name = "chet")]
#[command(about = "chet - network time, scheduled clicks and value formatting helpers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML settings file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current network time
    #[command(name = "time")]
    Time {
        /// Time server host name (defaults to the configured server)
        #[arg(short = 's', long)]
        server: Option<String>,

        /// Query timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Fail instead of falling back to the local clock
        #[arg(long)]
        strict: bool,

        /// Output pattern, e.g. "yyyy-MM-dd HH:mm:ss.fff"
        #[arg(short = 'f', long, default_value = "yyyy-MM-dd HH:mm:ss.fff")]
        format: String,
    },

    /// Click the left mouse button at a wall-clock time
    #[command(name = "click")]
    Click {
        /// Target time: "yyyy-MM-dd HH:mm:ss" or "HH:mm[:ss]" for today
        target: String,

        /// Number of clicks to send
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Use the local clock instead of the network clock
        #[arg(long)]
        local_clock: bool,

        /// Record the clicks without touching the mouse
        #[arg(long)]
        dry_run: bool,
    },

    /// Group CSV records (id,key,time) by time proximity
    #[command(name = "group")]
    Group {
        /// CSV file with an `id` and `time` column and an optional `key` column
        input: PathBuf,

        /// Maximum gap between neighbours in one group, in minutes
        #[arg(short = 't', long)]
        threshold_minutes: Option<i64>,

        /// Partition by the `key` column before grouping
        #[arg(long)]
        by_key: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write an amount in financial Chinese numerals
    #[command(name = "upper")]
    Upper {
        /// Decimal amount, e.g. 1234.56
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Transliterate hanzi to toneless pinyin
    #[command(name = "pinyin")]
    Pinyin {
        text: String,

        /// Print only the first letter of each syllable
        #[arg(long)]
        initials: bool,
    },

    /// Show the Chinese lunar date
    #[command(name = "lunar")]
    Lunar {
        /// Gregorian date (defaults to today)
        date: Option<String>,
    },

    /// Show the Julian Day Number
    #[command(name = "julian")]
    Julian {
        /// Date-time (defaults to now)
        date: Option<String>,
    },

    /// Hours elapsed between two date-times
    #[command(name = "elapsed")]
    Elapsed {
        /// Start (defaults to this time yesterday)
        #[arg(long)]
        from: Option<String>,

        /// End (defaults to now)
        #[arg(long)]
        to: Option<String>,
    },
}
