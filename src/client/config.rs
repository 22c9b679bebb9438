//! API endpoint configuration. Values come from CLI flags or their `PANDORA_*`
//! environment fallbacks; they are public and must never carry secrets.

use super::errors::AppError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_BASE_PATH: &str = "/api/v1";
/// Default request timeout (milliseconds) applied to every API call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration for the dashboard API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_base_path: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Builds a config for `api_url`, keeping the default base path and timeout.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the URL is empty, unparsable or not http(s).
    pub fn new(api_url: &str) -> Result<Self, AppError> {
        let api_url = normalize_value(api_url)
            .ok_or_else(|| AppError::Config("API URL is not configured.".to_string()))?;

        let parsed = Url::parse(&api_url)
            .map_err(|err| AppError::Config(format!("Invalid API URL {api_url}: {err}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        Ok(Self {
            api_url,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        if let Some(value) = normalize_value(base_path) {
            self.api_base_path = value;
        }
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Origin plus base path, e.g. `http://localhost:8000/api/v1`.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        build_url_with_base(&self.api_url, &self.api_base_path)
    }
}

/// Joins a base URL and a path with exactly one slash between them.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
