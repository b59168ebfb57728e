//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardmeta")]
#[command(about = "Twitter card meta tag generator for forum page exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Social handle rendered into twitter:creator (e.g. @acme)
        #[arg(long)]
        handle: Option<String>,

        /// Fallback image URL used to detect placeholder images
        #[arg(long)]
        base_url: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Render meta tags for one context file
    Render {
        /// Context file (.json or .toml page export)
        context: PathBuf,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the configured social handle for this render
        #[arg(long)]
        handle: Option<String>,
    },

    /// Render fragments for every context file under the site root
    Batch {
        /// Directory to write fragments into (default: next to each context)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List context files and their detected page kinds
    List,
}
