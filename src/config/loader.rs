//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetPackError, AssetPackResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths are resolved against the directory holding `path`.
pub fn load_with_warnings(path: &Path) -> AssetPackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AssetPackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetPackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config.resolve_paths(config_dir(path)), warnings))
}

/// Directory that relative paths in the config file at `path` are relative to
fn config_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Apply environment variable overrides (ASSETPACK_* prefix)
///
/// A relative `ASSETPACK_RUNTIME_DIR` resolves like the config file's own
/// paths, against the directory holding `config_path`.
pub fn with_env_overrides(config: Config, config_path: &Path) -> Config {
    apply_overrides(config, config_dir(config_path), |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: Config,
    base: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> Config {
    // ASSETPACK_COMPRESSION
    if let Some(val) = var("ASSETPACK_COMPRESSION") {
        config.compression.enabled = parse_flag(&val);
    }

    // ASSETPACK_BLOCKING
    if let Some(val) = var("ASSETPACK_BLOCKING") {
        config.compression.block_during_compression = parse_flag(&val);
    }

    // ASSETPACK_RUNTIME_DIR
    if let Some(dir) = var("ASSETPACK_RUNTIME_DIR") {
        if !dir.trim().is_empty() {
            let dir = PathBuf::from(dir);
            config.app.runtime_dir = if dir.is_absolute() {
                dir
            } else {
                base.join(dir)
            };
        }
    }

    // ASSETPACK_MINIFIER (whitespace-separated argv)
    if let Some(command) = var("ASSETPACK_MINIFIER") {
        let argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        if !argv.is_empty() {
            config.minifier.command = argv;
        }
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

/// Reject configurations that would only fail later, mid-compile
pub fn validate(config: &Config, file: &Path) -> AssetPackResult<()> {
    let invalid = |message: String| AssetPackError::Config {
        file: file.to_path_buf(),
        message,
    };

    if config.minifier.command.is_empty() || config.minifier.command[0].trim().is_empty() {
        return Err(invalid("minifier.command must name a program".to_string()));
    }

    if config.app.id.trim().is_empty() {
        return Err(invalid("app.id must not be empty".to_string()));
    }

    for (name, package) in &config.packages {
        for dependency in &package.depends {
            if !config.packages.contains_key(dependency) {
                return Err(invalid(format!(
                    "package '{name}' depends on undeclared package '{dependency}'"
                )));
            }
        }
    }

    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "id",
        "web_root",
        "runtime_dir",
        "compression",
        "enabled",
        "block_during_compression",
        "css_image_fingerprinting",
        "lock_timeout_secs",
        "retry_interval_ms",
        "minifier",
        "command",
        "publish",
        "assets_dir",
        "assets_url",
        "packages",
        "scripts",
        "styles",
        "compress",
        "base_url",
        "base_path",
        "media",
        "depends",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn apply_overrides_for_test(
    config: Config,
    config_path: &Path,
    vars: &[(&str, &str)],
) -> Config {
    apply_overrides(config, config_dir(config_path), |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
