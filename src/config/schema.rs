//! Configuration schema for databricks-mcp.toml.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabricksConfig {
    /// Workspace base URL, e.g. "https://adb-1234.5.azuredatabricks.net".
    pub host: String,

    /// Personal access token used as the bearer credential.
    pub token: String,

    /// Request timeout in seconds for every outbound call.
    pub timeout_secs: u64,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for DatabricksConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            timeout_secs: 60,
            log_level: "info".into(),
        }
    }
}

impl DatabricksConfig {
    /// Apply environment-variable overrides on top of file values.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("DATABRICKS_HOST") {
            self.host = host;
        }
        if let Ok(token) = std::env::var("DATABRICKS_TOKEN") {
            self.token = token;
        }
        if let Ok(timeout) = std::env::var("DATABRICKS_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.timeout_secs = secs;
            }
        }
        if let Ok(level) = std::env::var("DATABRICKS_MCP_LOG") {
            self.log_level = level;
        }
    }

    /// Host with any trailing slash removed, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = DatabricksConfig {
            host: "https://example.cloud.databricks.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://example.cloud.databricks.com");
    }

    #[test]
    fn defaults_are_sensible() {
        let config = DatabricksConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.log_level, "info");
    }

    // The only test that touches these variables, so no cross-test races.
    #[test]
    fn env_overrides_file_values() {
        std::env::set_var("DATABRICKS_HOST", "https://env.cloud.databricks.com");
        std::env::set_var("DATABRICKS_TOKEN", "env-token");
        std::env::set_var("DATABRICKS_TIMEOUT_SECS", "not-a-number");

        let mut config = DatabricksConfig {
            host: "https://file.cloud.databricks.com".into(),
            token: "file-token".into(),
            ..Default::default()
        };
        config.apply_env();

        assert_eq!(config.host, "https://env.cloud.databricks.com");
        assert_eq!(config.token, "env-token");
        // Unparseable timeout leaves the previous value in place.
        assert_eq!(config.timeout_secs, 60);

        std::env::remove_var("DATABRICKS_HOST");
        std::env::remove_var("DATABRICKS_TOKEN");
        std::env::remove_var("DATABRICKS_TIMEOUT_SECS");
    }
}
