//! Scenario: Non-Blocking Sites
//!
//! Journey: A site configured not to wait for compilation gets a request
//! while another process holds the compile lock.
//!
//! Success Criteria:
//! - The request is served the raw source URLs immediately
//! - Nothing is compiled or stored on its behalf

use std::time::{Duration, Instant};

use assetpack::application::LOCK_ID;
use assetpack::domain::ports::CompileLock;
use assetpack::infrastructure::FileCompileLock;
use assetpack::{AssetKind, Package, PackageSet, WaitPolicy};

use crate::common::*;

/// SCENARIO: Busy lock serves raw sources
#[test]
fn scenario_busy_lock_serves_raw_sources() {
    let env = TestEnv::builder()
        .with_web_file("js/app.js", APP_JS)
        .build();
    let packages: PackageSet = [Package::new("app")
        .with_scripts(["js/app.js", "//cdn.example.com/lib.js"])]
    .into_iter()
    .collect();
    let minifier = CountingMinifier::default();
    let _held = FileCompileLock::new(env.runtime_dir())
        .acquire(LOCK_ID, Duration::ZERO)
        .unwrap()
        .expect("lock is free");

    let started = Instant::now();
    let mut request = compressor(&env, &packages, &minifier, WaitPolicy::Bail);
    let outcome = request.register_package("app").unwrap();

    assert!(!outcome.is_compiled());
    assert_eq!(
        outcome.urls(AssetKind::Script),
        ["/js/app.js", "//cdn.example.com/lib.js"]
    );
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(minifier.calls(), 0);
    assert!(request.compiled_names().unwrap().is_empty());
}
