//! Error types for every layer of the aggregator.
//!
//! Only [`RegistryError`], [`ConfigError`] and [`NewsError`] ever reach a
//! caller. [`FetchError`] is swallowed at the fetcher boundary and
//! [`ScrapeError`] at the per-section boundary; both exist so those
//! boundaries have something concrete to log.

use thiserror::Error;

/// Failures inside the HTTP layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid header {name}: {reason}")]
    Header { name: String, reason: String },
}

/// Failures while turning fetched bytes into entries.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid css selector `{0}`")]
    Selector(String),

    #[error("invalid url `{url}`: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no data returned from {0}")]
    NoData(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("regex: {0}")]
    Regex(#[from] regex::Error),
}

/// Configuration errors detected while building the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate source id `{0}`")]
    DuplicateId(String),

    #[error("source `{id}` is invalid: {reason}")]
    InvalidAdapter { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors surfaced by [`crate::service::NewsSum`].
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("unknown source `{0}`")]
    UnknownSource(String),
}
