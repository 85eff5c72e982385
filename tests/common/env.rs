//! Test environment builder for isolated assetpack testing.
//!
//! Provides `TestEnv` - a temp dir holding a web root, a runtime dir and an
//! `assetpack.toml`, plus helpers to run the assetpack CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::COPY_MINIFIER;

/// Result of running an assetpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON (for `--json` runs)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated site with its own config file.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("assetpack.toml")
    }

    pub fn web_root(&self) -> PathBuf {
        self.root.path().join("www")
    }

    pub fn runtime_dir(&self) -> PathBuf {
        self.root.path().join("runtime")
    }

    /// Path on disk for a URL under the web root
    pub fn served_path(&self, url: &str) -> PathBuf {
        self.web_root().join(url.trim_start_matches('/'))
    }

    /// Write a file relative to the web root
    pub fn write_web_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.web_root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Run assetpack with this environment's config
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run assetpack with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("ASSETPACK_CONFIG")
            .env_remove("ASSETPACK_COMPRESSION")
            .env_remove("ASSETPACK_BLOCKING")
            .env_remove("ASSETPACK_RUNTIME_DIR")
            .env_remove("ASSETPACK_MINIFIER");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetpack");
        output_to_result(output)
    }

    /// Files under the runtime dir other than state and lock files
    pub fn runtime_artifacts(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(self.runtime_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                let name = p.file_name().unwrap_or_default().to_string_lossy();
                !name.ends_with(".json") && !name.ends_with(".lock")
            })
            .collect();
        files.sort();
        files
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    web_files: Vec<(String, Vec<u8>)>,
    sections: Vec<String>,
    minifier: String,
    compression: Vec<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            web_files: Vec::new(),
            sections: Vec::new(),
            minifier: COPY_MINIFIER.to_string(),
            compression: vec![
                "retry_interval_ms = 50".to_string(),
                "lock_timeout_secs = 1".to_string(),
            ],
        }
    }

    /// Add a file under the web root
    pub fn with_web_file(mut self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        self.web_files
            .push((relative.to_string(), content.as_ref().to_vec()));
        self
    }

    /// Append raw TOML (typically `[packages.*]` tables)
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.sections.push(toml.to_string());
        self
    }

    /// Minifier argv as a TOML array
    pub fn with_minifier(mut self, argv: &str) -> Self {
        self.minifier = argv.to_string();
        self
    }

    /// Extra `key = value` line in `[compression]`
    pub fn with_compression(mut self, line: &str) -> Self {
        self.compression.push(line.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let env = TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetpack")),
        };

        std::fs::create_dir_all(env.web_root()).expect("Failed to create web root");
        for (relative, content) in &self.web_files {
            env.write_web_file(relative, content);
        }

        let mut config = String::from(
            "[app]\nid = \"test\"\nweb_root = \"www\"\nruntime_dir = \"runtime\"\n\n",
        );
        config.push_str("[compression]\n");
        for line in &self.compression {
            config.push_str(line);
            config.push('\n');
        }
        config.push_str(&format!("\n[minifier]\ncommand = {}\n", self.minifier));
        for section in &self.sections {
            config.push('\n');
            config.push_str(section);
        }
        write(&env.config_path(), &config);
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write config");
}
