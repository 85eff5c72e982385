//! Scenario: Artifacts Removed Behind Our Back
//!
//! Journey: Someone wipes the assets dir (or a deploy replaces it) while the
//! state file still lists the compiled packages.
//!
//! Success Criteria:
//! - The stale record is dropped on the next read
//! - The next request recompiles and serves working URLs

use assetpack::{AssetKind, Package, PackageSet, ResetTarget};

use crate::assert_served;
use crate::common::*;

fn packages() -> PackageSet {
    [Package::new("app").with_scripts(["js/app.js"])]
        .into_iter()
        .collect()
}

/// SCENARIO: Deleted artifact triggers a recompile
#[test]
fn scenario_deleted_artifact_is_recompiled() {
    let env = TestEnv::builder().with_web_file("js/app.js", APP_JS).build();
    let packages = packages();
    let minifier = CountingMinifier::default();

    let mut first = compressor(&env, &packages, &minifier, blocking());
    let outcome = first.register_package("app").unwrap();
    let url = outcome.urls(AssetKind::Script)[0].clone();
    std::fs::remove_dir_all(env.web_root().join("assets")).unwrap();

    let mut second = compressor(&env, &packages, &minifier, blocking());
    assert_eq!(second.compiled_info("app", true).unwrap(), None);
    let outcome = second.register_package("app").unwrap();

    assert!(outcome.is_compiled());
    assert_eq!(outcome.urls(AssetKind::Script)[0], url);
    assert_served!(env, &url);
    assert_eq!(minifier.calls(), 2);
}

/// SCENARIO: Source edit followed by reset yields a new artifact name
#[test]
fn scenario_reset_after_source_change() {
    let env = TestEnv::builder().with_web_file("js/app.js", APP_JS).build();
    let packages = packages();
    let minifier = CountingMinifier::default();

    let mut request = compressor(&env, &packages, &minifier, blocking());
    let before = request.register_package("app").unwrap();
    env.write_web_file("js/app.js", "console.log('v2');");

    assert!(request.reset(ResetTarget::One("app".to_string())).unwrap());
    assert!(request.compiled_names().unwrap().is_empty());
    let after = request.register_package("app").unwrap();

    let before_url = &before.urls(AssetKind::Script)[0];
    let after_url = &after.urls(AssetKind::Script)[0];
    assert_ne!(before_url, after_url);
    assert!(!env.served_path(before_url).exists());
    assert_served!(env, after_url);
}
