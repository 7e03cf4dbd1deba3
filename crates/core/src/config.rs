//! API base URL configuration and endpoint construction.

use url::Url;

use crate::error::ConfigError;
use crate::task::TaskId;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the task API lives.
///
/// The stored base never ends with `/`, so endpoint paths can be appended
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the URL does not parse, is not `http`/`https`,
    /// or carries a query string or fragment.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    url: trimmed.to_string(),
                    scheme: other.to_string(),
                });
            }
        }

        if parsed.query().is_some() {
            return Err(ConfigError::UnexpectedComponent {
                url: trimmed.to_string(),
                component: "query string",
            });
        }
        if parsed.fragment().is_some() {
            return Err(ConfigError::UnexpectedComponent {
                url: trimmed.to_string(),
                component: "fragment",
            });
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Pick the first usable candidate, highest priority first.
    ///
    /// Blank candidates are skipped silently; invalid ones are logged and
    /// skipped. Falls back to [`DEFAULT_BASE_URL`].
    pub fn resolve<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        candidates
            .into_iter()
            .flatten()
            .filter(|candidate| !candidate.trim().is_empty())
            .find_map(|candidate| match Self::new(candidate) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring configured API base URL");
                    None
                }
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /` liveness endpoint.
    #[must_use]
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Collection endpoint.
    #[must_use]
    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    /// Single-task endpoint.
    #[must_use]
    pub fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}
