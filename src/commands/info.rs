//! Info command handler

use std::collections::BTreeMap;

use anyhow::Result;

use assetpack::presentation::output::render_record;
use assetpack::CompiledRecord;

use super::{emit_json, Context};

pub fn cmd_info(ctx: &mut Context, name: Option<&str>) -> Result<()> {
    let names = match name {
        Some(name) => vec![name.to_string()],
        None => ctx.compressor.compiled_names()?,
    };

    let mut records: BTreeMap<String, Option<CompiledRecord>> = BTreeMap::new();
    for package in names {
        let record = ctx.compressor.compiled_info(&package, true)?;
        records.insert(package, record);
    }

    if ctx.json {
        return emit_json(&records);
    }

    if records.is_empty() {
        println!("No compiled packages.");
        return Ok(());
    }
    for (package, record) in &records {
        match record {
            Some(record) => print!("{}", render_record(package, record)),
            None => println!("Package '{package}' is not compiled."),
        }
    }
    Ok(())
}
