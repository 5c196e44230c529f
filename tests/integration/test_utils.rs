//! Shared test utilities for integration tests
//!
//! Builds an on-disk tree of config files: valid documents in every format,
//! extends chains across directories, and broken documents.

use benchttp::config::{Config, MetricsField, Predicate, TestCase, TestTarget};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

pub const VALID_URL: &str = "http://localhost:9999?fib=30&delay=200ms";

pub const VALID_YAML: &str = r#"
request:
  method: POST
  url: http://localhost:9999?fib=30&delay=200ms
  header:
    key0: [val0, val1]
    key1: [val0]
  body:
    type: raw
    content: '{"key0":"val0","key1":"val1"}'

runner:
  requests: 100
  concurrency: 1
  interval: 50ms
  requestTimeout: 2s
  globalTimeout: 60s

tests:
  - name: minimum response time
    field: ResponseTimes.Min
    predicate: GT
    target: 80ms
  - name: maximum response time
    field: ResponseTimes.Max
    predicate: LTE
    target: 120ms
  - name: 100% availability
    field: RequestFailureCount
    predicate: EQ
    target: 0
"#;

pub const VALID_JSON: &str = r#"{
  "request": {
    "method": "POST",
    "url": "http://localhost:9999?fib=30&delay=200ms",
    "header": {
      "key0": ["val0", "val1"],
      "key1": ["val0"]
    },
    "body": {
      "type": "raw",
      "content": "{\"key0\":\"val0\",\"key1\":\"val1\"}"
    }
  },
  "runner": {
    "requests": 100,
    "concurrency": 1,
    "interval": "50ms",
    "requestTimeout": "2s",
    "globalTimeout": "60s"
  },
  "tests": [
    {"name": "minimum response time", "field": "ResponseTimes.Min", "predicate": "GT", "target": "80ms"},
    {"name": "maximum response time", "field": "ResponseTimes.Max", "predicate": "LTE", "target": "120ms"},
    {"name": "100% availability", "field": "RequestFailureCount", "predicate": "EQ", "target": 0}
  ]
}"#;

pub const VALID_TOML: &str = r#"
[request]
method = "POST"
url = "http://localhost:9999?fib=30&delay=200ms"

[request.header]
key0 = ["val0", "val1"]
key1 = ["val0"]

[request.body]
type = "raw"
content = '{"key0":"val0","key1":"val1"}'

[runner]
requests = 100
concurrency = 1
interval = "50ms"
requestTimeout = "2s"
globalTimeout = "60s"

[[tests]]
name = "minimum response time"
field = "ResponseTimes.Min"
predicate = "GT"
target = "80ms"

[[tests]]
name = "maximum response time"
field = "ResponseTimes.Max"
predicate = "LTE"
target = "120ms"

[[tests]]
name = "100% availability"
field = "RequestFailureCount"
predicate = "EQ"
target = 0
"#;

/// Temporary directory populated with config fixtures.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        let fixtures = Self {
            dir: TempDir::new().unwrap(),
        };

        fixtures.write("valid/benchttp.yml", VALID_YAML);
        fixtures.write("valid/benchttp.yaml", VALID_YAML);
        fixtures.write("valid/benchttp.json", VALID_JSON);
        fixtures.write("valid/benchttp.toml", VALID_TOML);
        fixtures.write("valid/benchttp-zeros.yml", "runner:\n  globalTimeout: 42ms\n");

        fixtures.write(
            "extends/extends-valid-parent.yml",
            "request:\n  method: POST\n  url: http://parent.config\n",
        );
        fixtures.write(
            "extends/extends-valid-child.yml",
            "extends: ./extends-valid-parent.yml\nrequest:\n  url: http://child.config\n",
        );
        fixtures.write(
            "extends/nest-0/nest-1/extends-valid-nested.yml",
            "extends: ../../extends-valid-parent.yml\nrequest:\n  url: http://nested.config\n",
        );
        fixtures.write(
            "extends/extends-circular-self.yml",
            "extends: ./extends-circular-self.yml\n",
        );
        fixtures.write("extends/extends-circular-0.yml", "extends: ./extends-circular-1.yml\n");
        fixtures.write("extends/extends-circular-1.yml", "extends: ./extends-circular-2.yml\n");
        fixtures.write("extends/extends-circular-2.yml", "extends: ./extends-circular-0.yml\n");
        fixtures.write(
            "extends/extends-missing-parent.yml",
            "extends: ./does-not-exist.yml\n",
        );

        fixtures.write("invalid/badext.yams", "request:\n  method: GET\n");
        fixtures.write("invalid/badfields.yml", "runner:\n  requests: [1]\n  concurrency: a lot\n");
        fixtures.write("invalid/badfields.json", r#"{"runner": {"requests": [1]}}"#);
        fixtures.write("invalid/badduration.yml", "runner:\n  interval: soon\n");

        fixtures
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// The configuration every `valid/benchttp.*` fixture resolves to.
pub fn expected_valid_config() -> Config {
    let mut config = Config::default();
    config.request.method = "POST".to_string();
    config.request.url = VALID_URL.to_string();
    config
        .request
        .header
        .insert("key0".to_string(), vec!["val0".to_string(), "val1".to_string()]);
    config
        .request
        .header
        .insert("key1".to_string(), vec!["val0".to_string()]);
    config.request.body.content = r#"{"key0":"val0","key1":"val1"}"#.to_string();

    config.runner.requests = 100;
    config.runner.concurrency = 1;
    config.runner.interval = Duration::from_millis(50);
    config.runner.request_timeout = Duration::from_secs(2);
    config.runner.global_timeout = Duration::from_secs(60);

    config.tests = vec![
        TestCase {
            name: "minimum response time".to_string(),
            field: MetricsField::ResponseTimesMin,
            predicate: Predicate::GreaterThan,
            target: TestTarget::Duration(Duration::from_millis(80)),
        },
        TestCase {
            name: "maximum response time".to_string(),
            field: MetricsField::ResponseTimesMax,
            predicate: Predicate::LessThanOrEqual,
            target: TestTarget::Duration(Duration::from_millis(120)),
        },
        TestCase {
            name: "100% availability".to_string(),
            field: MetricsField::RequestFailureCount,
            predicate: Predicate::Equal,
            target: TestTarget::Count(0),
        },
    ];
    config
}
