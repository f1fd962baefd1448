//! Command-line interface definitions for codeblank

use clap::{Parser, Subcommand, ValueEnum};
use codeblank::LineEnding;
use std::path::PathBuf;

/// Output format for the preview command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PreviewFormat {
    /// Annotated source with blanks wrapped in markers
    #[default]
    Raw,
    /// The parsed document as JSON, as consumed by the exercise UI
    Json,
}

/// CLI structure for the codeblank application
#[derive(Parser)]
#[command(name = "codeblank")]
#[command(version)]
#[command(about = "Fill-in-the-blank source code transform", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./codeblank.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Line separator for generated output, overriding the configuration
    #[arg(long, value_enum, global = true)]
    pub line_ending: Option<LineEnding>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for codeblank
#[derive(Subcommand)]
pub enum Commands {
    /// Parse an annotated source file and show the result
    Preview {
        /// Annotated source file
        file: PathBuf,

        /// Language id (defaults to the file extension, then the configuration)
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "raw")]
        format: PreviewFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill the blanks of an annotated source file with values
    Reconstruct {
        /// Annotated source file
        file: PathBuf,

        /// Blank value, in document order (repeatable)
        #[arg(short, long = "blank", value_name = "VALUE")]
        blanks: Vec<String>,

        /// JSON file holding an array of blank values, used after any --blank values
        #[arg(long, value_name = "JSON")]
        blanks_file: Option<PathBuf>,

        /// Language id (defaults to the file extension, then the configuration)
        #[arg(short, long)]
        language: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the blanks of every source file under a directory
    Check {
        /// Directory or file to check (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Write a default codeblank.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
