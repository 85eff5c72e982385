//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--config`, `--json`, `--verbose`) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// assetpack - combine, minify and fingerprint web asset packages
#[derive(Parser, Debug)]
#[command(name = "assetpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "ASSETPACK_CONFIG",
        default_value = "assetpack.toml"
    )]
    pub config: PathBuf,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile one package, or every declared package
    Compress {
        /// Package to compile (all when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete compiled artifacts and their records
    Reset {
        /// Package to reset (all when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Print nothing
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show what is known about compiled packages
    Info {
        /// Package to show (all compiled packages when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Serve a package the way a web request would and print its URLs
    Register {
        /// Package to register
        #[arg(short, long)]
        name: String,
    },
}
