//! Integration tests for config file decoding across formats

use super::test_utils::{expected_valid_config, Fixtures};
use benchttp::config::{
    default_config, fold_chain, resolve_chain, ConfigResolver, Representation,
};
use benchttp::error::{ConfigError, DecodeError};
use std::time::Duration;

fn with_url(url: &str) -> Representation {
    let mut cli = Representation::default();
    cli.request.url = Some(url.to_string());
    cli
}

#[test]
fn test_every_extension_resolves_to_same_config() {
    let fixtures = Fixtures::new();
    let expected = expected_valid_config();

    for ext in ["yml", "yaml", "json", "toml"] {
        let path = fixtures.path(&format!("valid/benchttp.{}", ext));
        let config = ConfigResolver::resolve(Some(path.as_path()), &Representation::default())
            .unwrap_or_else(|e| panic!("{} failed: {}", ext, e));
        assert_eq!(config, expected, "unexpected config for .{} file", ext);
    }
}

#[test]
fn test_file_overrides_only_fields_it_sets() {
    let fixtures = Fixtures::new();
    let chain = resolve_chain(&fixtures.path("valid/benchttp-zeros.yml")).unwrap();

    let mut base = default_config();
    base.request.method = "POST".to_string();
    base.request.url = "https://overriden.com".to_string();
    base.runner.global_timeout = Duration::from_millis(10);

    let config = fold_chain(base, &chain).unwrap();
    assert_eq!(config.request.method, "POST", "kept value not set by the file");
    assert_eq!(config.runner.global_timeout, Duration::from_millis(42));
}

#[test]
fn test_file_errors_are_reported_per_kind() {
    let fixtures = Fixtures::new();
    let cli = with_url("http://localhost");

    let err = ConfigResolver::resolve(Some(fixtures.path("invalid/badext.yams").as_path()), &cli).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));

    for name in ["invalid/badfields.yml", "invalid/badfields.json"] {
        let err = ConfigResolver::resolve(Some(fixtures.path(name).as_path()), &cli).unwrap_err();
        assert!(
            matches!(err, ConfigError::Decode { .. }),
            "{} should fail to decode, got {}",
            name,
            err
        );
    }

    match ConfigResolver::resolve(Some(fixtures.path("invalid/badduration.yml").as_path()), &cli).unwrap_err() {
        ConfigError::Decode {
            path,
            source: DecodeError::Schema(violations),
        } => {
            assert_eq!(path, fixtures.path("invalid/badduration.yml"));
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "interval");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_root_file_falls_back_to_defaults() {
    let fixtures = Fixtures::new();
    let config =
        ConfigResolver::resolve(Some(fixtures.path("invalid/bad path").as_path()), &with_url("http://localhost"))
            .unwrap();

    let mut expected = default_config();
    expected.request.url = "http://localhost".to_string();
    assert_eq!(config, expected);
}

#[test]
fn test_cli_layer_beats_every_file() {
    let fixtures = Fixtures::new();
    let mut cli = with_url("https://cli.example");
    cli.runner.requests = Some(-1);
    cli.runner.global_timeout = Some("1m30s".to_string());

    let config = ConfigResolver::resolve(Some(fixtures.path("valid/benchttp.json").as_path()), &cli).unwrap();
    assert_eq!(config.request.url, "https://cli.example");
    assert_eq!(config.request.method, "POST");
    assert_eq!(config.runner.requests, -1);
    assert_eq!(config.runner.global_timeout, Duration::from_secs(90));
    assert_eq!(config.tests.len(), 3);
}
