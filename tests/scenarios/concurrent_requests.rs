//! Scenario: Cold Cache Under Load
//!
//! Journey: A deploy empties the runtime dir and several requests ask for
//! the same package at once.
//!
//! Success Criteria:
//! - The minifier runs once per asset kind, not once per request
//! - Every request is served the same compiled URLs

use std::thread;
use std::time::Duration;

use assetpack::{AssetKind, Package, PackageSet, WaitPolicy};

use crate::assert_served;
use crate::common::*;

const REQUESTS: usize = 6;

fn packages() -> PackageSet {
    [
        Package::new("jquery").with_scripts(["js/jquery.js"]),
        Package::new("app")
            .with_scripts(["js/app.js"])
            .with_styles(["css/app.css"])
            .with_depends(["jquery"]),
    ]
    .into_iter()
    .collect()
}

fn site() -> TestEnv {
    TestEnv::builder()
        .with_web_file("js/jquery.js", JQUERY_JS)
        .with_web_file("js/app.js", APP_JS)
        .with_web_file("css/app.css", APP_CSS)
        .build()
}

/// SCENARIO: Simultaneous requests compile each package once
#[test]
fn scenario_concurrent_requests_compile_once() {
    let env = site();
    let packages = packages();
    let minifier = CountingMinifier::slow(Duration::from_millis(150));

    let urls: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..REQUESTS)
            .map(|_| {
                scope.spawn(|| {
                    let mut request = compressor(&env, &packages, &minifier, blocking());
                    let outcome = request.register_package("app").expect("register");
                    assert!(outcome.is_compiled(), "request served raw sources");
                    let mut urls = outcome.urls(AssetKind::Script).to_vec();
                    urls.extend(outcome.urls(AssetKind::Style).iter().cloned());
                    urls
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // jquery.js, app.js and app.css
    assert_eq!(minifier.calls(), 3);
    assert!(urls.windows(2).all(|pair| pair[0] == pair[1]));
    for url in &urls[0] {
        assert_served!(env, url);
    }
}

/// SCENARIO: An explicit compile while requests are served
#[test]
fn scenario_compile_command_waits_for_running_request() {
    let env = site();
    let packages = packages();
    let minifier = CountingMinifier::slow(Duration::from_millis(200));

    thread::scope(|scope| {
        let request = scope.spawn(|| {
            let mut request = compressor(&env, &packages, &minifier, blocking());
            request.register_package("jquery").expect("register")
        });
        thread::sleep(Duration::from_millis(50));

        let mut cli = compressor(&env, &packages, &minifier, WaitPolicy::Bail);
        assert!(cli.compile("jquery").expect("compile"));
        assert!(request.join().unwrap().is_compiled());
    });

    assert_eq!(minifier.calls(), 2);
}
