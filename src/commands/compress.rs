//! Compress command handler

use anyhow::{bail, Result};
use serde::Serialize;

use super::{emit_json, Context};

#[derive(Serialize)]
struct CompressOutcome {
    package: String,
    compiled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn cmd_compress(ctx: &mut Context, name: Option<&str>) -> Result<()> {
    let names = match name {
        Some(name) => {
            if !ctx.compressor.package_names().iter().any(|n| n == name) {
                bail!("unknown package '{name}'");
            }
            vec![name.to_string()]
        }
        None => ctx.compressor.package_names(),
    };

    let mut outcomes = Vec::with_capacity(names.len());
    for package in names {
        let outcome = match ctx.compressor.compile(&package) {
            Ok(compiled) => CompressOutcome {
                package,
                compiled,
                error: None,
            },
            Err(e) => CompressOutcome {
                package,
                compiled: false,
                error: Some(format!("{e:#}")),
            },
        };

        if !ctx.json {
            if outcome.compiled {
                println!("Package '{}' compressed.", outcome.package);
            } else {
                println!("Can't compress package '{}'", outcome.package);
            }
            if let Some(error) = &outcome.error {
                eprintln!("Error: {error}");
            }
        }
        outcomes.push(outcome);
    }

    if ctx.json {
        emit_json(&outcomes)?;
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} package(s) failed to compress");
    }
    Ok(())
}
