//! Server configuration.
//!
//! Every setting is read from the environment with a built-in fallback, so the server
//! starts without any configuration when run next to a `data/` directory.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `ANALYTICS_HOST`
    pub host: String,
    /// `ANALYTICS_PORT`
    pub port: u16,
    /// `ANALYTICS_DATA_DIR`: directory holding the dataset CSV files.
    pub data_dir: PathBuf,
    /// `ANALYTICS_PRELOAD`: decode every file once at startup instead of per request.
    pub preload: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            preload: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("ANALYTICS_HOST").unwrap_or(defaults.host),
            port: lookup("ANALYTICS_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            data_dir: lookup("ANALYTICS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            preload: lookup("ANALYTICS_PRELOAD")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.preload),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("ANALYTICS_HOST", "0.0.0.0"),
            ("ANALYTICS_PORT", "9000"),
            ("ANALYTICS_DATA_DIR", "/srv/oulad"),
            ("ANALYTICS_PRELOAD", "TRUE"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, PathBuf::from("/srv/oulad"));
        assert!(config.preload);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("ANALYTICS_PORT", "http"), ("ANALYTICS_PRELOAD", "maybe")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.preload);
    }
}
