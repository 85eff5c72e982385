//! assetpack CLI
//!
//! Usage: assetpack [--config <FILE>] <COMMAND>
//!
//! Commands:
//!   compress  Compile one package or all of them
//!   reset     Delete compiled artifacts
//!   info      Show compiled package records
//!   register  Serve a package like a web request would

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use assetpack::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = commands::Context::load(&cli.config, cli.json)?;

    match cli.command {
        Commands::Compress { name } => commands::compress::cmd_compress(&mut ctx, name.as_deref()),
        Commands::Reset { name, quiet } => {
            commands::reset::cmd_reset(&mut ctx, name.as_deref(), quiet)
        }
        Commands::Info { name } => commands::info::cmd_info(&mut ctx, name.as_deref()),
        Commands::Register { name } => commands::register::cmd_register(&mut ctx, &name),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("assetpack={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
