//! Reusable source files and package declarations.

/// Minifier that copies its input verbatim
pub const COPY_MINIFIER: &str = r#"["cp", "{input}", "{output}"]"#;

/// Minifier that always exits non-zero
pub const FAILING_MINIFIER: &str = r#"["sh", "-c", "echo minifier exploded >&2; exit 3"]"#;

pub const JQUERY_JS: &str = "window.jQuery = function () {};";

pub const APP_JS: &str = "jQuery(function () { console.log('ready'); });";

pub const APP_CSS: &str = ".logo { background: url('/img/logo.png') no-repeat; }";

pub const LOGO_PNG: &[u8] = b"\x89PNG\r\n\x1a\nlogo";

/// `jquery` plus an `app` package depending on it
pub const TWO_PACKAGES: &str = r#"
[packages.jquery]
scripts = ["js/jquery.js"]

[packages.app]
scripts = ["js/app.js", "https://cdn.example.com/analytics.js"]
styles = ["css/app.css"]
media = "screen"
depends = ["jquery"]
"#;
