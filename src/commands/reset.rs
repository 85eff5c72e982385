//! Reset command handler

use anyhow::Result;
use serde_json::json;

use assetpack::ResetTarget;

use super::{emit_json, Context};

pub fn cmd_reset(ctx: &mut Context, name: Option<&str>, quiet: bool) -> Result<()> {
    let target = match name {
        Some(name) => ResetTarget::One(name.to_string()),
        None => ResetTarget::All,
    };
    let reset = ctx.compressor.reset(target)?;

    if ctx.json {
        return emit_json(&json!({ "reset": reset, "package": name }));
    }
    if quiet {
        return Ok(());
    }

    match (reset, name) {
        (false, _) => println!("Nothing to do."),
        (true, Some(name)) => println!("Package '{name}' reset."),
        (true, None) => println!("All packages reset."),
    }
    Ok(())
}
