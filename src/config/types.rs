//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Package, PackageSet};
use crate::error::AssetPackResult;
use crate::infrastructure::minify::DEFAULT_COMMAND;

use super::loader::{self, ConfigWarning};

/// Application identity and directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scopes persisted state when several applications share a runtime dir
    #[serde(default = "default_app_id")]
    pub id: String,

    /// Document root; package entries resolve against it
    #[serde(default = "default_web_root")]
    pub web_root: PathBuf,

    /// Private directory for artifacts, the state file and the lock file
    #[serde(default = "default_runtime_dir")]
    pub runtime_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id: default_app_id(),
            web_root: default_web_root(),
            runtime_dir: default_runtime_dir(),
        }
    }
}

fn default_app_id() -> String {
    "assetpack".to_string()
}

fn default_web_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_runtime_dir() -> PathBuf {
    PathBuf::from("runtime")
}

/// Compression behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// When false every request is served the raw sources
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Wait for a busy compile instead of serving raw sources
    #[serde(default = "default_true")]
    pub block_during_compression: bool,

    /// Append content fingerprints to CSS image URLs
    #[serde(default = "default_true")]
    pub css_image_fingerprinting: bool,

    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,

    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_during_compression: true,
            css_image_fingerprinting: true,
            lock_timeout_secs: default_lock_timeout_secs(),
            retry_interval_ms: default_retry_interval_ms(),
        }
    }
}

impl CompressionConfig {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_secs(self.lock_timeout_secs)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_lock_timeout_secs() -> u64 {
    15
}

fn default_retry_interval_ms() -> u64 {
    1000
}

/// External minifier invocation
///
/// ```toml
/// [minifier]
/// command = ["java", "-jar", "yuicompressor-2.4.7.jar", "--type", "{type}", "-o", "{output}", "{input}"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifierConfig {
    #[serde(default = "default_minifier_command")]
    pub command: Vec<String>,
}

impl Default for MinifierConfig {
    fn default() -> Self {
        Self {
            command: default_minifier_command(),
        }
    }
}

fn default_minifier_command() -> Vec<String> {
    DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect()
}

/// Where published files go and how they are addressed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Defaults to `<web_root>/assets`
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    #[serde(default = "default_assets_url")]
    pub assets_url: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            assets_url: default_assets_url(),
        }
    }
}

fn default_assets_url() -> String {
    "/assets".to_string()
}

/// One `[packages.<name>]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default)]
    pub scripts: Vec<String>,

    #[serde(default)]
    pub styles: Vec<String>,

    /// `false` copies sources verbatim instead of running the minifier
    #[serde(default = "default_true")]
    pub compress: bool,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub base_path: Option<PathBuf>,

    #[serde(default)]
    pub media: Option<String>,

    #[serde(default)]
    pub depends: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            scripts: Vec::new(),
            styles: Vec::new(),
            compress: true,
            base_url: None,
            base_path: None,
            media: None,
            depends: Vec::new(),
        }
    }
}

impl PackageConfig {
    fn to_package(&self, name: &str) -> Package {
        let mut package = Package::new(name)
            .with_scripts(self.scripts.iter().cloned())
            .with_styles(self.styles.iter().cloned())
            .with_compress(self.compress)
            .with_depends(self.depends.iter().cloned());
        if let Some(base_url) = &self.base_url {
            package = package.with_base_url(base_url.clone());
        }
        if let Some(base_path) = &self.base_path {
            package = package.with_base_path(base_path.clone());
        }
        if let Some(media) = &self.media {
            package = package.with_media(media.clone());
        }
        package
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub compression: CompressionConfig,

    #[serde(default)]
    pub minifier: MinifierConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub packages: BTreeMap<String, PackageConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetPackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetPackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ASSETPACK_* prefix); relative
    /// paths resolve against `config_path`'s directory
    pub fn with_env_overrides(self, config_path: &Path) -> Self {
        loader::with_env_overrides(self, config_path)
    }

    /// Resolve relative paths against `base` (the config file's directory)
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        self.app.web_root = resolve(&self.app.web_root);
        self.app.runtime_dir = resolve(&self.app.runtime_dir);
        self.publish.assets_dir = self.publish.assets_dir.as_deref().map(resolve);
        for package in self.packages.values_mut() {
            package.base_path = package.base_path.as_deref().map(resolve);
        }
        self
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self, file: &Path) -> AssetPackResult<()> {
        loader::validate(self, file)
    }

    /// Assets directory, `<web_root>/assets` when not configured
    pub fn assets_dir(&self) -> PathBuf {
        self.publish
            .assets_dir
            .clone()
            .unwrap_or_else(|| self.app.web_root.join("assets"))
    }

    /// Declared packages as domain entities
    pub fn packages(&self) -> PackageSet {
        self.packages
            .iter()
            .map(|(name, package)| package.to_package(name))
            .collect()
    }
}
