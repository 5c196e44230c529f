//! Property-based tests for field-level layering guarantees

use benchttp::config::{default_config, fold_chain, ChainEntry, ConfigLayer, Representation};
use proptest::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

fn layer_strategy() -> impl Strategy<Value = ConfigLayer> {
    (
        proptest::option::of(prop::sample::select(vec!["GET", "POST", "PUT", "DELETE"])),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(-1i64..1000),
        proptest::option::of(0i64..100),
        proptest::option::of(0u64..10_000),
        proptest::option::of(1u64..60_000),
    )
        .prop_map(|(method, host, requests, concurrency, interval_ms, timeout_ms)| ConfigLayer {
            method: method.map(str::to_string),
            url: host.map(|h| format!("http://{}.test", h)),
            requests,
            concurrency,
            interval: interval_ms.map(Duration::from_millis),
            global_timeout: timeout_ms.map(Duration::from_millis),
            ..Default::default()
        })
}

fn runner_repr(requests: Option<i64>, concurrency: Option<i64>) -> Representation {
    let mut repr = Representation::default();
    repr.runner.requests = requests;
    repr.runner.concurrency = concurrency;
    repr
}

/// Overriding twice with the same layer changes nothing more than once
#[test]
fn test_override_is_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&layer_strategy(), |layer| {
            let once = default_config().override_with(&layer);
            let twice = once.clone().override_with(&layer);
            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// An empty layer leaves any configuration unchanged
#[test]
fn test_empty_layer_is_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&layer_strategy(), |layer| {
            let config = default_config().override_with(&layer);
            prop_assert_eq!(config.clone().override_with(&ConfigLayer::default()), config);
            Ok(())
        })
        .unwrap();
}

/// The most specific file that sets a field wins; unset fields fall through
#[test]
fn test_chain_precedence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let strategy = (
        proptest::option::of(-1i64..500),
        proptest::option::of(-1i64..500),
        proptest::option::of(1i64..50),
        proptest::option::of(1i64..50),
    );
    runner
        .run(&strategy, |(leaf_requests, root_requests, leaf_conc, root_conc)| {
            let chain = vec![
                ChainEntry {
                    path: PathBuf::from("leaf.yml"),
                    representation: runner_repr(leaf_requests, leaf_conc),
                },
                ChainEntry {
                    path: PathBuf::from("root.yml"),
                    representation: runner_repr(root_requests, root_conc),
                },
            ];
            let base = default_config();
            let config = fold_chain(base.clone(), &chain).unwrap();

            prop_assert_eq!(
                config.runner.requests,
                leaf_requests.or(root_requests).unwrap_or(base.runner.requests)
            );
            prop_assert_eq!(
                config.runner.concurrency,
                leaf_conc.or(root_conc).unwrap_or(base.runner.concurrency)
            );
            prop_assert_eq!(config.request, base.request);
            Ok(())
        })
        .unwrap();
}
