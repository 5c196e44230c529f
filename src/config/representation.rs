//! Partial configuration as written in config files or given as CLI flags.
//!
//! Every field is optional: `None` means "not set by this layer", which is
//! never confused with a zero value such as `requests: 0`. Durations stay raw
//! text until [`Representation::decode`] turns the whole representation into a
//! [`ConfigLayer`], so files and flags share one duration syntax.

use crate::config::duration::parse_duration;
use crate::config::merge::ConfigLayer;
use crate::config::{BodyKind, ConfigField, MetricsField, Predicate, RequestBody, TestCase, TestTarget};
use crate::error::Violation;
use indexmap::IndexMap;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Representation {
    /// Parent config file, relative to the directory of the declaring file.
    pub extends: Option<String>,

    #[serde(default)]
    pub request: RequestRepr,

    #[serde(default)]
    pub runner: RunnerRepr,

    pub tests: Option<Vec<TestCaseRepr>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestRepr {
    pub method: Option<String>,
    pub url: Option<String>,
    pub header: Option<IndexMap<String, Vec<String>>>,
    pub body: Option<BodyRepr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyRepr {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RunnerRepr {
    pub requests: Option<i64>,
    pub concurrency: Option<i64>,
    pub interval: Option<String>,
    pub request_timeout: Option<String>,
    pub global_timeout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCaseRepr {
    pub name: String,
    pub field: String,
    pub predicate: String,
    pub target: RawTarget,
}

/// Target as written: an integer for count fields, duration text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTarget {
    Count(i64),
    Text(String),
}

impl Representation {
    /// True when no field at all is set.
    pub fn is_empty(&self) -> bool {
        *self == Representation::default()
    }

    /// Decode into a typed layer, failing with every invalid field.
    pub fn decode(&self) -> Result<ConfigLayer, Vec<Violation>> {
        let (layer, violations) = self.decode_partial();
        if violations.is_empty() {
            Ok(layer)
        } else {
            Err(violations)
        }
    }

    /// Decode the valid fields and report the invalid ones, which are left unset.
    pub fn decode_partial(&self) -> (ConfigLayer, Vec<Violation>) {
        let mut violations = Vec::new();

        let body = match &self.request.body {
            Some(body) => match BodyKind::parse(&body.kind) {
                Ok(kind) => Some(RequestBody {
                    kind,
                    content: body.content.clone(),
                }),
                Err(message) => {
                    violations.push(Violation::new(ConfigField::Body.name(), message));
                    None
                }
            },
            None => None,
        };

        let interval = decode_duration(ConfigField::Interval, &self.runner.interval, &mut violations);
        let request_timeout = decode_duration(
            ConfigField::RequestTimeout,
            &self.runner.request_timeout,
            &mut violations,
        );
        let global_timeout = decode_duration(
            ConfigField::GlobalTimeout,
            &self.runner.global_timeout,
            &mut violations,
        );

        let tests = self.tests.as_ref().map(|tests| {
            tests
                .iter()
                .enumerate()
                .filter_map(|(index, test)| test.decode(index, &mut violations))
                .collect()
        });

        let layer = ConfigLayer {
            method: self.request.method.clone(),
            url: self.request.url.clone(),
            header: self.request.header.clone(),
            body,
            requests: self.runner.requests,
            concurrency: self.runner.concurrency,
            interval,
            request_timeout,
            global_timeout,
            tests,
        };
        (layer, violations)
    }
}

fn decode_duration(
    field: ConfigField,
    raw: &Option<String>,
    violations: &mut Vec<Violation>,
) -> Option<Duration> {
    let text = raw.as_deref()?;
    match parse_duration(text) {
        Ok(duration) => Some(duration),
        Err(message) => {
            violations.push(Violation::new(field.name(), message));
            None
        }
    }
}

impl TestCaseRepr {
    fn decode(&self, index: usize, violations: &mut Vec<Violation>) -> Option<TestCase> {
        let at = |key: &str| format!("tests[{}].{}", index, key);
        let before = violations.len();

        if self.name.trim().is_empty() {
            violations.push(Violation::new(at("name"), "missing"));
        }
        let field = MetricsField::parse(&self.field)
            .map_err(|message| violations.push(Violation::new(at("field"), message)))
            .ok();
        let predicate = Predicate::parse(&self.predicate)
            .map_err(|message| violations.push(Violation::new(at("predicate"), message)))
            .ok();

        let target = field.and_then(|field| match (&self.target, field.is_duration()) {
            (RawTarget::Text(text), true) => parse_duration(text)
                .map(TestTarget::Duration)
                .map_err(|message| violations.push(Violation::new(at("target"), message)))
                .ok(),
            (RawTarget::Count(n), false) => Some(TestTarget::Count(*n)),
            (RawTarget::Count(n), true) => {
                violations.push(Violation::new(
                    at("target"),
                    format!("want a duration for {}, got {}", field, n),
                ));
                None
            }
            (RawTarget::Text(text), false) => {
                violations.push(Violation::new(
                    at("target"),
                    format!("want an integer for {}, got {:?}", field, text),
                ));
                None
            }
        });

        if violations.len() > before {
            return None;
        }
        Some(TestCase {
            name: self.name.clone(),
            field: field?,
            predicate: predicate?,
            target: target?,
        })
    }
}
