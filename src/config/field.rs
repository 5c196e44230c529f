//! Names and usage strings of the configurable fields.
//!
//! Field names are shared by config file keys, CLI flag names and
//! validation messages.

/// A configurable field, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigField {
    Method,
    Url,
    Header,
    Body,
    Requests,
    Concurrency,
    Interval,
    RequestTimeout,
    GlobalTimeout,
}

impl ConfigField {
    pub const ALL: [ConfigField; 9] = [
        ConfigField::Method,
        ConfigField::Url,
        ConfigField::Header,
        ConfigField::Body,
        ConfigField::Requests,
        ConfigField::Concurrency,
        ConfigField::Interval,
        ConfigField::RequestTimeout,
        ConfigField::GlobalTimeout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigField::Method => "method",
            ConfigField::Url => "url",
            ConfigField::Header => "header",
            ConfigField::Body => "body",
            ConfigField::Requests => "requests",
            ConfigField::Concurrency => "concurrency",
            ConfigField::Interval => "interval",
            ConfigField::RequestTimeout => "requestTimeout",
            ConfigField::GlobalTimeout => "globalTimeout",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            ConfigField::Method => "HTTP request method",
            ConfigField::Url => "HTTP request url",
            ConfigField::Header => "HTTP request header, repeatable (<key>:<value>)",
            ConfigField::Body => "HTTP request body (<type>:<content>, type \"raw\" only)",
            ConfigField::Requests => "Number of requests to run, -1 for unlimited",
            ConfigField::Concurrency => "Number of connections to run concurrently",
            ConfigField::Interval => "Minimum duration between two non-concurrent requests",
            ConfigField::RequestTimeout => "Timeout for each HTTP request",
            ConfigField::GlobalTimeout => "Max duration of the whole run",
        }
    }
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
