//! Runtime configuration of the asset server, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `RECORDS_HOST` | `127.0.0.1` |
//! | `RECORDS_PORT` | `8080` |
//! | `RECORDS_OPEN_BROWSER` | `true` |

use std::env;

pub const HOST_VAR: &str = "RECORDS_HOST";
pub const PORT_VAR: &str = "RECORDS_PORT";
pub const OPEN_BROWSER_VAR: &str = "RECORDS_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL after startup.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to the defaults
    /// for unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(host) = read(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port
                .parse()
                .map_err(|e| format!("{} must be a port number, got {:?}: {}", PORT_VAR, port, e))?;
        }
        if let Some(flag) = read(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(OPEN_BROWSER_VAR, &flag)?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("{} must be a boolean, got {:?}", key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (OPEN_BROWSER_VAR, "off"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "  "), (PORT_VAR, "")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(err.contains(PORT_VAR));

        let err = ServerConfig::from_lookup(lookup(&[(OPEN_BROWSER_VAR, "maybe")])).unwrap_err();
        assert!(err.contains(OPEN_BROWSER_VAR));
    }
}
