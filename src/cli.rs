// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `termplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "termplan",
    version,
    about = "Plan course enrollment term by term from prerequisite data.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Termplan.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Prerequisite pair file. Overrides `[courses].prerequisites`.
    #[arg(long, value_name = "PATH")]
    pub prereqs: Option<String>,

    /// Course already completed. May be repeated; added to
    /// `[courses].completed`.
    #[arg(long = "completed", value_name = "COURSE")]
    pub completed: Vec<String>,

    /// Maximum courses per term. Overrides `[planner].term_capacity`.
    #[arg(long, value_name = "N")]
    pub term_capacity: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TERMPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a schedule that reaches every given course.
    Plan {
        #[arg(required = true, value_name = "COURSE")]
        courses: Vec<String>,
    },

    /// Check a schedule. Each TERM is a comma-separated course list.
    Validate {
        #[arg(value_name = "TERM")]
        terms: Vec<String>,
    },

    /// List the prerequisites still missing for a course.
    Missing {
        #[arg(value_name = "COURSE")]
        course: String,
    },

    /// Print the loaded graph without planning anything.
    Show,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
