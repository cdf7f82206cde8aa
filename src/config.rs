use std::path::PathBuf;

use crate::logging::LogLevel;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Credentials for the mail relay, baked in at build time.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: non_empty(option_env!("EMAILJS_SERVICE_ID")),
            template_id: non_empty(option_env!("EMAILJS_TEMPLATE_ID")),
            public_key: non_empty(option_env!("EMAILJS_PUBLIC_KEY")),
        }
    }
}

/// Log threshold for the browser build.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn client_log_level() -> LogLevel {
    option_env!("LOG_LEVEL")
        .and_then(LogLevel::parse)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| *value != 0)
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty(lookup("DIST_DIR").as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = lookup("LOG_LEVEL")
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn server_config_defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn server_config_reads_overrides() {
        let config = config_from(&[("PORT", " 3000 "), ("DIST_DIR", "public"), ("LOG_LEVEL", "debug")]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn server_config_rejects_invalid_values() {
        let config = config_from(&[("PORT", "0"), ("DIST_DIR", "   "), ("LOG_LEVEL", "loud")]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);

        assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
    }

    #[test]
    fn non_empty_trims_and_drops_blank_values() {
        assert_eq!(non_empty(Some("  abc ")), Some("abc".to_string()));
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
    }
}
