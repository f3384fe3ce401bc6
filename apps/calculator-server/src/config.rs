//! Layered application configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed `APP__` (`__` separates nested keys,
//!    e.g. `APP__SERVER__PORT=9000`)
//! 4. CLI overrides

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 2022,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base console level: `error`, `warn`, `info`, `debug` or `trace`.
    pub console_level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Cross-origin policy for the browser keypad client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: vec!["GET".to_owned(), "POST".to_owned(), "OPTIONS".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: false,
            max_age_seconds: 600,
        }
    }
}

/// Values taken from the command line that override every other source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns an error if the file cannot be parsed or a value has the wrong type.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("APP__").split("__"));

        figment.extract::<Self>().with_context(|| match path {
            Some(p) => format!("failed to parse config file {}", p.display()),
            None => "failed to load configuration".to_owned(),
        })
    }

    pub fn apply_cli_overrides(&mut self, cli: CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if cli.verbose > 0 {
            self.logging.console_level = match cli.verbose {
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
            .to_owned();
        }
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load_or_default(None).unwrap();
        assert_eq!(cfg.server.port, 2022);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.cors.allowed_origins, vec!["*".to_owned()]);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("calc.yaml");
        std::fs::write(
            &path,
            "server:\n  port: 8088\nlogging:\n  console_level: debug\n  format: json\n",
        )
        .unwrap();

        let cfg = AppConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1");
        assert_eq!(cfg.logging.console_level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn invalid_yaml_is_reported_with_path() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "server: [unclosed").unwrap();

        let err = AppConfig::load_or_default(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(CliOverrides {
            port: Some(3000),
            verbose: 2,
        });
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.logging.console_level, "debug");
    }

    #[test]
    fn socket_addr_rejects_hostnames() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.socket_addr().unwrap().port(), 2022);

        cfg.server.bind_addr = "not-an-ip".to_owned();
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn yaml_rendering_contains_sections() {
        let yaml = AppConfig::default().to_yaml().unwrap();
        assert!(yaml.contains("server:"));
        assert!(yaml.contains("port: 2022"));
        assert!(yaml.contains("cors:"));
    }
}
