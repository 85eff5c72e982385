//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "All packages reset.");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a URL is served by a file under the web root.
///
/// # Example
/// ```ignore
/// assert_served!(env, "/assets/1a2b3c4d/app_0123456789abcdef.js");
/// ```
#[macro_export]
macro_rules! assert_served {
    ($env:expr, $url:expr) => {
        let path = $env.served_path($url);
        assert!(
            path.is_file(),
            "Expected '{}' to be served from {:?}, but it doesn't exist.\n\
             Files found:\n  {}",
            $url,
            path,
            $crate::common::list_all_files(&$env.web_root()).join("\n  ")
        );
    };
}
