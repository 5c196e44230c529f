//! Hand-off of a resolved configuration to a benchmark engine.
//!
//! The engine itself (HTTP transport, scheduling, metric aggregation and test
//! evaluation) lives outside this crate and is reached through [`Engine`].
//! This module only defines the data exchanged with it and the guard applied
//! to its progress notifications.

use crate::config::{Config, TestCase};
use crate::error::{EngineError, RunError};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// State of a run at the time of a progress notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Done,
    Canceled,
    TimedOut,
}

/// A progress notification emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Requests completed so far.
    pub done: u64,
    /// Requests planned; `None` when the run is unlimited.
    pub max: Option<u64>,
    pub elapsed: Duration,
    pub timeout: Duration,
    pub status: RunStatus,
}

/// Receiver of progress notifications.
pub trait ProgressSink {
    fn notify(&mut self, progress: &Progress);
}

impl<F> ProgressSink for F
where
    F: FnMut(&Progress),
{
    fn notify(&mut self, progress: &Progress) {
        self(progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResponseTimes {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

/// Aggregated metrics of a run, as computed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MetricsAggregate {
    pub response_times: ResponseTimes,
    pub request_count: u64,
    pub request_success_count: u64,
    pub request_failure_count: u64,
}

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub input: TestCase,
    pub pass: bool,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TestSuiteResults {
    pub pass: bool,
    pub results: Vec<TestResult>,
}

impl TestSuiteResults {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.pass).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub metrics: MetricsAggregate,
    pub tests: TestSuiteResults,
    pub total_duration: Duration,
}

/// A benchmark engine.
pub trait Engine {
    fn run(&self, config: &Config, progress: &mut dyn ProgressSink) -> Result<Report, EngineError>;
}

/// Forwards notifications to the caller's sink, dropping any that would make
/// progress go backwards.
struct MonotonicSink<'a> {
    inner: &'a mut dyn ProgressSink,
    silent: bool,
    last: Option<(u64, Duration)>,
}

impl ProgressSink for MonotonicSink<'_> {
    fn notify(&mut self, progress: &Progress) {
        if self.silent {
            return;
        }
        if let Some((done, elapsed)) = self.last {
            if progress.done < done || progress.elapsed < elapsed {
                warn!(
                    done = progress.done,
                    last_done = done,
                    elapsed_ms = progress.elapsed.as_millis() as u64,
                    last_elapsed_ms = elapsed.as_millis() as u64,
                    "Dropping out-of-order progress notification"
                );
                return;
            }
        }
        self.last = Some((progress.done, progress.elapsed));
        self.inner.notify(progress);
    }
}

/// Run `config` on `engine`, forwarding progress to `sink` unless `silent`.
///
/// A report whose test suite did not pass is an error.
pub fn run_benchmark(
    engine: &dyn Engine,
    config: &Config,
    silent: bool,
    sink: &mut dyn ProgressSink,
) -> Result<Report, RunError> {
    info!(url = %config.request.url, requests = config.runner.requests, "Starting benchmark");
    let mut guarded = MonotonicSink {
        inner: sink,
        silent,
        last: None,
    };
    let report = engine.run(config, &mut guarded)?;
    debug!(
        total_ms = report.total_duration.as_millis() as u64,
        requests = report.metrics.request_count,
        "Benchmark finished"
    );

    if !report.tests.pass {
        return Err(RunError::TestSuiteFailed {
            failed: report.tests.failed_count(),
            total: report.tests.results.len(),
        });
    }
    Ok(report)
}
