// Runtime configuration: the API credential and the fixed timings of a run.
// Both are resolved from the process environment once, at startup.

use crate::error::{Result, UgcError};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the bearer token.
pub const API_KEY_VAR: &str = "MAKEUGC_API_KEY";
/// Optional override for the service base URL.
pub const BASE_URL_VAR: &str = "MAKEUGC_BASE_URL";
/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.makeugc.ai/api/v1";

/// Bearer token for the MakeUGC API. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Reads and trims `MAKEUGC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::resolve_with(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` but with an injectable lookup, so callers can
    /// resolve from something other than the real environment.
    pub fn resolve_with<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let raw = lookup(API_KEY_VAR).unwrap_or_default();
        let key = raw.trim();
        if key.is_empty() {
            return Err(UgcError::MissingCredential);
        }
        Ok(Credential(key.to_string()))
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Endpoint and timing settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Per-request timeout for every HTTP call.
    pub request_timeout: Duration,
    /// Delay between two status checks.
    pub poll_interval: Duration,
    /// Ceiling on accumulated poll time.
    pub max_wait: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(600),
        }
    }
}

impl Config {
    /// Default settings, with the base URL taken from `MAKEUGC_BASE_URL`
    /// when it is set to something non-blank.
    pub fn from_env() -> Self {
        Self::default().with_base_url_override(std::env::var(BASE_URL_VAR).ok())
    }

    /// Points the config at another base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn with_base_url_override(self, value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
