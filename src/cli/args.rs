//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Static landing page builder: portrait, feedback link and repository link
#[derive(Parser, Debug)]
#[command(name = "feedpage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the page and the feedback redirect to the output directory
    Render {
        /// Output directory (default: output_dir setting)
        #[arg(short, long, value_hint = ValueHint::DirPath, conflicts_with = "stdout")]
        out: Option<PathBuf>,
        /// Print the page document instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Show the component tree
    Tree,

    /// Show the arrangement at a viewport width
    Layout {
        /// Viewport width in px
        #[arg(short, long)]
        width: u32,
    },

    /// Show version, commit and build date
    Build,

    /// List supported environment variables
    Envs,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
