//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

/// Load configuration: optional JSON file, then env var overrides.
///
/// - `HEALTH_NAV_CONFIG`: path to a JSON config file (missing file is an error,
///   unset var means defaults)
/// - `HEALTH_NAV_PORT`: overrides the listen port
pub fn load_config() -> Result<Config> {
    let mut config = match std::env::var("HEALTH_NAV_CONFIG") {
        Ok(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path))?
        }
        Err(_) => Config::default(),
    };

    if let Ok(port) = std::env::var("HEALTH_NAV_PORT") {
        config.port = port
            .parse()
            .context("HEALTH_NAV_PORT must be a port number")?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        env::remove_var("HEALTH_NAV_CONFIG");
        env::remove_var("HEALTH_NAV_PORT");

        let config = load_config().expect("config should load");
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn port_env_overrides_default() {
        env::remove_var("HEALTH_NAV_CONFIG");
        env::set_var("HEALTH_NAV_PORT", "9090");

        let config = load_config().expect("config should load");

        env::remove_var("HEALTH_NAV_PORT");

        assert_eq!(config.port, 9090);
    }

    #[test]
    #[serial]
    fn config_file_sets_port() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"port": 3000}}"#).expect("write config");

        env::set_var("HEALTH_NAV_CONFIG", file.path());
        env::remove_var("HEALTH_NAV_PORT");

        let config = load_config().expect("config should load");

        env::remove_var("HEALTH_NAV_CONFIG");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn invalid_port_env_is_an_error() {
        env::remove_var("HEALTH_NAV_CONFIG");
        env::set_var("HEALTH_NAV_PORT", "not-a-port");

        let result = load_config();

        env::remove_var("HEALTH_NAV_PORT");

        assert!(result.is_err());
    }
}
