//! Layered server configuration: defaults, YAML file, `CATALOGO__` env vars

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "CATALOGO__";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: productos::Config,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (sqlite:// or postgres://)
    pub url: String,
    pub max_connections: u32,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://catalogo.db?mode=rwc".to_string(),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Load configuration; a `path` that does not exist is an error
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = path {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.database.run_migrations);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.catalog, productos::Config::default());
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "server:\n  port: 9100\nlogging:\n  format: json\ncatalog:\n  raw_param_limit: 30"
        )
        .unwrap();

        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.catalog.raw_param_limit, Decimal::from(30));
        assert_eq!(cfg.catalog.raw_limit, Decimal::from(100));
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  listen: 1").unwrap();
        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/catalogo.yaml"))).is_err());
    }
}
