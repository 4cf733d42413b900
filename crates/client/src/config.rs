//! Runtime configuration for the inventory client.

/// Environment variable naming the API base URL.
pub const API_URL_VAR: &str = "STOCKROOM_API_URL";

/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_VAR: &str = "STOCKROOM_LOG";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the `/products` resource hangs off.
    pub api_url: String,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from the process environment, then from values captured at build
    /// time, then defaults.
    ///
    /// Browser builds have no process environment, so only the build-time
    /// values apply there.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| {
                match key {
                    API_URL_VAR => option_env!("STOCKROOM_API_URL"),
                    LOG_FILTER_VAR => option_env!("STOCKROOM_LOG"),
                    _ => None,
                }
                .map(str::to_string)
            })
        })
    }

    /// Load using an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_url: get(API_URL_VAR).unwrap_or(defaults.api_url),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}
