pub mod schema;

pub use schema::DatabricksConfig;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Default config file location (~/.databricks-mcp/config.toml).
pub fn default_config_path() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".databricks-mcp").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".databricks-mcp/config.toml"))
}

/// Resolve a user-supplied path that may contain `~`.
pub fn resolve_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Load config from the given path (a missing file is fine, env vars may
/// carry everything), then apply environment overrides and validate.
pub fn load_config(path: &Path) -> Result<DatabricksConfig> {
    let mut config = if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read databricks-mcp config file")?;
        toml::from_str(&contents).context("Failed to parse databricks-mcp config (TOML)")?
    } else {
        DatabricksConfig::default()
    };

    config.apply_env();

    if config.host.is_empty() {
        bail!("Databricks host is not configured (set DATABRICKS_HOST or add `host` to the config file)");
    }
    if config.token.is_empty() {
        bail!("Databricks token is not configured (set DATABRICKS_TOKEN or add `token` to the config file)");
    }

    Ok(config)
}
