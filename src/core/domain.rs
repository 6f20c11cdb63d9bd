use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::core::library::{SyncError, SyncResult};

pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/mxgicillust/bwjson/main/isbn.json";
pub const DEFAULT_LOOKUP_URL: &str = "https://api.mxgic007.workers.dev/";
pub const DEFAULT_OUTPUT_PATH: &str = "data.json";

// Identifiable defines common traits that can be shared by cached records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn parse(value: &str) -> SyncResult<LogFormat> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(SyncError::validation(
                format!("unknown log format {:?}, expected json or text", value).as_str(), None)),
        }
    }
}

// Configuration abstracts config options for a cache sync run
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub source_url: String,
    pub lookup_url: String,
    pub output_path: String,
    pub pace: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            pace: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("bookcache/{}", env!("CARGO_PKG_VERSION")),
            log_format: LogFormat::Json,
        }
    }

    // Returns the configuration together with every override that was rejected. A rejected
    // override keeps the default for its own field only.
    pub fn from_env() -> (Self, Vec<SyncError>) {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    // applies BOOKCACHE_* overrides on top of the defaults
    pub fn from_vars<F>(lookup: F) -> (Self, Vec<SyncError>)
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new();
        let mut errors = vec![];
        if let Some(url) = lookup("BOOKCACHE_SOURCE_URL") {
            config.source_url = url;
        }
        if let Some(url) = lookup("BOOKCACHE_LOOKUP_URL") {
            config.lookup_url = url;
        }
        if let Some(path) = lookup("BOOKCACHE_OUTPUT") {
            config.output_path = path;
        }
        if let Some(millis) = lookup("BOOKCACHE_PACE_MS") {
            match parse_number("BOOKCACHE_PACE_MS", &millis) {
                Ok(millis) => config.pace = Duration::from_millis(millis),
                Err(err) => errors.push(err),
            }
        }
        if let Some(secs) = lookup("BOOKCACHE_TIMEOUT_SECS") {
            match parse_number("BOOKCACHE_TIMEOUT_SECS", &secs) {
                Ok(secs) => config.request_timeout = Duration::from_secs(secs),
                Err(err) => errors.push(err),
            }
        }
        if let Some(agent) = lookup("BOOKCACHE_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(format) = lookup("BOOKCACHE_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Ok(format) => config.log_format = format,
                Err(err) => errors.push(err),
            }
        }
        (config, errors)
    }

    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

fn parse_number(name: &str, value: &str) -> SyncResult<u64> {
    value.trim().parse::<u64>().map_err(|err| SyncError::validation(
        format!("invalid value {:?} for {}: {}", value, name, err).as_str(), Some(name.to_string())))
}
