//! External Command Minifier
//!
//! Runs a configured argv template once per artifact. Placeholders:
//! `{input}`, `{output}` and `{type}` (`js` or `css`).

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{MinifyError, Minifier};
use crate::domain::value_objects::AssetKind;

/// YUI compressor invocation used when no command is configured
pub const DEFAULT_COMMAND: &[&str] = &[
    "java",
    "-jar",
    "yuicompressor-2.4.7.jar",
    "--type",
    "{type}",
    "-o",
    "{output}",
    "{input}",
];

#[derive(Debug, Clone)]
pub struct CommandMinifier {
    argv: Vec<String>,
}

impl Default for CommandMinifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect())
    }
}

impl CommandMinifier {
    /// `argv[0]` is the program; the rest are arguments
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    fn expand(&self, input: &Path, output: &Path, kind: AssetKind) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        self.argv
            .iter()
            .map(|arg| {
                arg.replace("{input}", &input)
                    .replace("{output}", &output)
                    .replace("{type}", kind.extension())
            })
            .collect()
    }
}

impl Minifier for CommandMinifier {
    fn name(&self) -> &'static str {
        "command"
    }

    fn minify(&self, input: &Path, output: &Path, kind: AssetKind) -> Result<(), MinifyError> {
        let argv = self.expand(input, output, kind);
        let command = argv.join(" ");
        let Some((program, args)) = argv.split_first() else {
            return Err(MinifyError::Spawn {
                command,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        tracing::debug!(%command, "running minifier");
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| MinifyError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(MinifyError::Failed {
                kind,
                command,
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
