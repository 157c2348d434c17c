use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The platform rejected a permission query (unknown name, blocked, ...).
    /// `detail` is the platform's own description, e.g. `NotSupportedError: ...`.
    #[error("{detail}")]
    UnsupportedOrRejectedQuery { name: String, detail: String },

    #[error("TimeoutError: permission query for {name} did not settle within {after_ms} ms")]
    QueryTimedOut { name: String, after_ms: u32 },

    #[error("{0} is unavailable in this environment")]
    HostUnavailable(&'static str),

    #[error("presence test for {test} threw: {detail}")]
    PresenceTestFailed { test: &'static str, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid checker config: {0}")]
    InvalidJson(String),

    #[error("unknown log level {0:?}, using info")]
    UnknownLogLevel(String),
}
