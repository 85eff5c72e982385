//! Register command handler

use anyhow::Result;
use serde::Serialize;

use assetpack::presentation::output::render_registration;
use assetpack::Registered;

use super::{emit_json, Context};

#[derive(Serialize)]
struct JsonRegistration<'a> {
    package: &'a str,
    #[serde(flatten)]
    registered: &'a Registered,
}

pub fn cmd_register(ctx: &mut Context, name: &str) -> Result<()> {
    ctx.compressor.register_package(name)?;
    let registrations = ctx.compressor.registrations();

    if ctx.json {
        let items: Vec<JsonRegistration<'_>> = registrations
            .iter()
            .map(|(package, registered)| JsonRegistration {
                package,
                registered,
            })
            .collect();
        return emit_json(&items);
    }

    for (package, registered) in registrations {
        print!("{}", render_registration(package, registered));
    }
    Ok(())
}
