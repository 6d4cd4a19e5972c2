//! CLI argument definitions.
//!
//! The command line is one positional command name followed by a shared
//! bundle of positionals and flags. [`Invocation`](super::Invocation) turns
//! the bundle into a typed command.

use clap::Parser;
use std::path::PathBuf;

/// fsnav - File manipulation and directory navigation.
#[derive(Debug, Clone, Parser)]
#[command(name = "fsnav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to execute (ls, cd, mkdir, rmdir, rm, cp, mv, find, logs, cat)
    pub command: String,

    /// Path for the command, defaults to the working directory
    #[arg(default_value = ".")]
    pub path: String,

    /// Destination path for cp and mv
    pub destination: Option<String>,

    /// Pattern for the find command
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Directory to delete recursively with rm
    #[arg(short, long, value_name = "TARGET")]
    pub recursive: Option<String>,

    /// File name for the cat command
    #[arg(short, long)]
    pub file: Option<String>,

    /// Show hidden entries with ls
    #[arg(short, long)]
    pub all: bool,

    /// Directory holding path.json and logs.log (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
