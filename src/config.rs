//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0"
);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub listing: ListingConfig,
    pub edition: EditionConfig,
    pub cache: CacheConfig,
    /// How many sources a multi-source request fetches at once.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            listing: ListingConfig::default(),
            edition: EditionConfig::default(),
            cache: CacheConfig::default(),
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Extra headers merged into every request, after the browser defaults.
    pub headers: BTreeMap<String, String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Hard cap on pages fetched per section, whatever the page reports.
    pub max_pages_per_section: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_pages_per_section: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditionConfig {
    /// Hours before which local time still counts as the previous edition.
    pub cutoff_hour: u32,
}

impl Default for EditionConfig {
    fn default() -> Self {
        Self { cutoff_hour: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: 300,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, path: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        })
    }
}

/// Load configuration from `path`, or defaults when no path is given.
#[instrument(level = "info")]
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        info!("No config file given; using defaults");
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config = Config::from_yaml(&text, path)?;
    info!(%path, "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.fetch.timeout_secs, 15);
        assert_eq!(c.listing.max_pages_per_section, 10);
        assert_eq!(c.edition.cutoff_hour, 4);
        assert_eq!(c.cache.ttl_secs, 300);
        assert!(!c.cache.enabled);
        assert_eq!(c.concurrency, 4);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "listing:\n  max_pages_per_section: 3\ncache:\n  enabled: true\n";
        let c = Config::from_yaml(yaml, "inline").unwrap();
        assert_eq!(c.listing.max_pages_per_section, 3);
        assert!(c.cache.enabled);
        assert_eq!(c.cache.ttl_secs, 300);
        assert_eq!(c.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_headers_and_concurrency() {
        let yaml = "fetch:\n  headers:\n    X-Test: one\nconcurrency: 8\n";
        let c = Config::from_yaml(yaml, "inline").unwrap();
        assert_eq!(c.fetch.headers.get("X-Test").map(String::as_str), Some("one"));
        assert_eq!(c.concurrency, 8);
    }

    #[test]
    fn test_bad_yaml_is_reported() {
        let err = Config::from_yaml("listing: [", "broken.yaml").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_no_path_is_default() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }
}
