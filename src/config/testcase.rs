//! Test assertions run by the engine against the metrics of a run.

use crate::config::duration;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Metric a test case is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsField {
    ResponseTimesMin,
    ResponseTimesMax,
    ResponseTimesMean,
    RequestCount,
    RequestSuccessCount,
    RequestFailureCount,
}

impl MetricsField {
    const ALL: [MetricsField; 6] = [
        MetricsField::ResponseTimesMin,
        MetricsField::ResponseTimesMax,
        MetricsField::ResponseTimesMean,
        MetricsField::RequestCount,
        MetricsField::RequestSuccessCount,
        MetricsField::RequestFailureCount,
    ];

    pub fn path(self) -> &'static str {
        match self {
            MetricsField::ResponseTimesMin => "ResponseTimes.Min",
            MetricsField::ResponseTimesMax => "ResponseTimes.Max",
            MetricsField::ResponseTimesMean => "ResponseTimes.Mean",
            MetricsField::RequestCount => "RequestCount",
            MetricsField::RequestSuccessCount => "RequestSuccessCount",
            MetricsField::RequestFailureCount => "RequestFailureCount",
        }
    }

    pub fn parse(path: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|field| field.path() == path)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|f| f.path()).collect();
                format!("unknown metrics field {:?} (expected one of {})", path, known.join(", "))
            })
    }

    /// Response-time fields hold durations; the others hold counts.
    pub fn is_duration(self) -> bool {
        matches!(
            self,
            MetricsField::ResponseTimesMin
                | MetricsField::ResponseTimesMax
                | MetricsField::ResponseTimesMean
        )
    }
}

impl fmt::Display for MetricsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for MetricsField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Comparison applied between the metric value and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Predicate {
    #[serde(rename = "EQ")]
    Equal,
    #[serde(rename = "NEQ")]
    NotEqual,
    #[serde(rename = "GT")]
    GreaterThan,
    #[serde(rename = "GTE")]
    GreaterThanOrEqual,
    #[serde(rename = "LT")]
    LessThan,
    #[serde(rename = "LTE")]
    LessThanOrEqual,
}

impl Predicate {
    pub fn parse(text: &str) -> Result<Self, String> {
        match text {
            "EQ" => Ok(Predicate::Equal),
            "NEQ" => Ok(Predicate::NotEqual),
            "GT" => Ok(Predicate::GreaterThan),
            "GTE" => Ok(Predicate::GreaterThanOrEqual),
            "LT" => Ok(Predicate::LessThan),
            "LTE" => Ok(Predicate::LessThanOrEqual),
            other => Err(format!(
                "unknown predicate {:?} (expected EQ, NEQ, GT, GTE, LT or LTE)",
                other
            )),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Predicate::Equal => "==",
            Predicate::NotEqual => "!=",
            Predicate::GreaterThan => ">",
            Predicate::GreaterThanOrEqual => ">=",
            Predicate::LessThan => "<",
            Predicate::LessThanOrEqual => "<=",
        }
    }
}

/// Expected value; its kind follows [`MetricsField::is_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TestTarget {
    #[serde(serialize_with = "duration::serialize")]
    Duration(Duration),
    Count(i64),
}

impl fmt::Display for TestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestTarget::Duration(d) => f.write_str(&duration::format_duration(*d)),
            TestTarget::Count(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub field: MetricsField,
    pub predicate: Predicate,
    pub target: TestTarget,
}
