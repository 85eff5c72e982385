//! Output Rendering
//!
//! Plain-text views of compiled records and registrations. JSON output
//! serializes the same values with `serde_json`.

use std::fmt::Write;

use crate::application::Registered;
use crate::domain::entities::{AssetRecord, CompiledRecord};
use crate::domain::value_objects::AssetKind;

/// Human-readable diagnostics for one compiled package
pub fn render_record(name: &str, record: &CompiledRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Package '{}' (compiled {})",
        name,
        record.compiled_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for kind in AssetKind::ALL {
        if let Some(part) = record.part(kind) {
            render_part(&mut out, kind, part);
        }
    }
    out
}

fn render_part(out: &mut String, kind: AssetKind, part: &AssetRecord) {
    let _ = writeln!(out, "  [{kind}]");
    if let Some(file) = &part.file {
        let _ = writeln!(out, "    file:  {}", file.display());
    }
    if let Some(media) = &part.media {
        let _ = writeln!(out, "    media: {media}");
    }
    for url in &part.urls {
        let _ = writeln!(out, "    url:   {url}");
    }
    for source in &part.files {
        let _ = writeln!(out, "    from:  {}", source.display());
    }
}

/// URLs a page would include for one registered package
pub fn render_registration(name: &str, registered: &Registered) -> String {
    let mode = if registered.is_compiled() {
        "compiled"
    } else {
        "raw"
    };
    let mut out = String::new();
    let _ = writeln!(out, "{name} ({mode})");
    for url in registered.urls(AssetKind::Script) {
        let _ = writeln!(out, "  script {url}");
    }
    for url in registered.urls(AssetKind::Style) {
        match registered.media() {
            Some(media) => {
                let _ = writeln!(out, "  style  {url} [{media}]");
            }
            None => {
                let _ = writeln!(out, "  style  {url}");
            }
        }
    }
    out
}
