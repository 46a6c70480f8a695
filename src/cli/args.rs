use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focuswave")]
#[command(about = "A focus timer with daily streaks and weekly stats")]
#[command(long_about = "focuswave - A focus timer for the terminal

Run a countdown, and every interval you finish is added to today's total.
Finish at least one interval on consecutive days to build a streak and earn
titles. Leaving the terminal or quitting mid-interval abandons it: abandoned
time is never recorded.

QUICK START:
  focuswave start              Run a 25-minute focus interval
  focuswave start -d 50m       Run a 50-minute interval
  focuswave stats              Today, this week, this month
  focuswave streak             Current streak and title

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory (defaults to ~/.focuswave)
    #[arg(long, global = true, env = "FOCUSWAVE_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a focus interval in the terminal
    ///
    /// Opens a full-screen countdown. When it reaches zero the interval is
    /// recorded for today. Switching away from the terminal (where the
    /// terminal reports focus changes) or quitting before zero abandons the
    /// interval and records nothing.
    ///
    /// Keys: space start/pause, r reset, +/- adjust length, q quit
    ///
    /// # Examples
    ///
    ///   focuswave start              Default length from config (25m)
    ///   focuswave start -d 50m       Custom length
    ///   focuswave start -d 1h30m
    #[command(alias = "s")]
    Start {
        /// Interval length (e.g., 25, 25m, 1h30m, 90s)
        #[arg(long, short = 'd')]
        duration: Option<String>,
    },

    /// Record a completed interval without running the timer
    ///
    /// # Examples
    ///
    ///   focuswave record 25
    ///   focuswave record 45m --date yesterday
    ///   focuswave record 1h --date 2024-01-10
    Record {
        /// Interval length (e.g., 25, 25m, 1h)
        #[arg(allow_hyphen_values = true)]
        duration: String,

        /// Date to credit (YYYY-MM-DD, today, yesterday, "3 days ago")
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show focus totals for today, this week and this month
    Stats {
        /// Reference date (defaults to today)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show the current streak and title
    Streak,

    /// List the streak titles and what it takes to earn them
    Titles,

    /// Show recorded days, most recent first
    History {
        /// Number of days to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
