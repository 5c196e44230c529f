//! CLI presentation: text and json formatters for the resolved configuration.

use crate::config::duration::format_duration;
use crate::config::{Config, UNLIMITED_REQUESTS};

pub fn format_config_text(config: &Config) -> String {
    let request = &config.request;
    let runner = &config.runner;

    let mut output = String::from("Request:\n");
    output.push_str(&format!("  method: {}\n", request.method));
    output.push_str(&format!("  url: {}\n", request.url));
    if request.header.is_empty() {
        output.push_str("  header: (none)\n");
    } else {
        output.push_str("  header:\n");
        for (key, values) in &request.header {
            output.push_str(&format!("    {}: {}\n", key, values.join(", ")));
        }
    }
    if request.body.content.is_empty() {
        output.push_str("  body: (empty)\n");
    } else {
        output.push_str(&format!(
            "  body: {} ({} bytes)\n",
            request.body.kind.as_str(),
            request.body.content.len()
        ));
    }

    output.push_str("Runner:\n");
    if runner.requests == UNLIMITED_REQUESTS {
        output.push_str("  requests: unlimited\n");
    } else {
        output.push_str(&format!("  requests: {}\n", runner.requests));
    }
    output.push_str(&format!("  concurrency: {}\n", runner.concurrency));
    output.push_str(&format!("  interval: {}\n", format_duration(runner.interval)));
    output.push_str(&format!(
        "  requestTimeout: {}\n",
        format_duration(runner.request_timeout)
    ));
    output.push_str(&format!(
        "  globalTimeout: {}\n",
        format_duration(runner.global_timeout)
    ));

    if config.tests.is_empty() {
        output.push_str("Tests: (none)");
    } else {
        output.push_str(&format!("Tests: {}", config.tests.len()));
        for test in &config.tests {
            output.push_str(&format!(
                "\n  {}: {} {} {}",
                test.name,
                test.field,
                test.predicate.symbol(),
                test.target
            ));
        }
    }
    output
}

pub fn format_config_json(config: &Config) -> String {
    serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string())
}
